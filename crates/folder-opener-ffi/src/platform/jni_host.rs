//! Android intent host
//!
//! Builds `android.content.Intent` objects over JNI and resolves or starts
//! them against the application context.
//!
//! UniFFI loads the library through JNA, so no `JNI_OnLoad` runs and no
//! activity glue hands us a `JavaVM`. The app registers its context once,
//! before the first channel call:
//!
//! ```kotlin
//! package dev.folderopener
//!
//! object AndroidContext {
//!     init { System.loadLibrary("folder_opener_ffi") }
//!     @JvmStatic external fun init(context: android.content.Context)
//! }
//! ```

use folder_opener_engine::{HostError, Intent, IntentHost, IntentTarget};
use jni::objects::{GlobalRef, JClass, JObject, JString, JThrowable, JValue};
use jni::{JNIEnv, JavaVM};
use std::sync::OnceLock;

const ACTIVITY_NOT_FOUND_EXCEPTION: &str = "android/content/ActivityNotFoundException";
const SECURITY_EXCEPTION: &str = "java/lang/SecurityException";

/// Failure inside a JNI call sequence, before it is mapped to a [`HostError`].
enum CallError {
    Jni(jni::errors::Error),
    Host(HostError),
}

impl From<jni::errors::Error> for CallError {
    fn from(e: jni::errors::Error) -> Self {
        CallError::Jni(e)
    }
}

/// The VM and application context registered by the app.
struct AndroidContext {
    vm: JavaVM,
    context: GlobalRef,
}

static ANDROID_CONTEXT: OnceLock<AndroidContext> = OnceLock::new();

/// `dev.folderopener.AndroidContext.init(context)`
///
/// Keeps the application context (not the passed activity) so the reference
/// stays valid for the life of the process. Later calls are ignored.
#[unsafe(no_mangle)]
pub extern "system" fn Java_dev_folderopener_AndroidContext_init(
    mut env: JNIEnv,
    _class: JClass,
    context: JObject,
) {
    if ANDROID_CONTEXT.get().is_some() {
        log::debug!("Android context already registered");
        return;
    }
    match register_context(&mut env, &context) {
        Ok(android) => {
            let _ = ANDROID_CONTEXT.set(android);
            log::info!("Android context registered");
        }
        Err(e) => {
            // Leave the exception (if any) for the Kotlin caller to see
            log::error!("Failed to register Android context: {e}");
        }
    }
}

fn register_context(
    env: &mut JNIEnv,
    context: &JObject,
) -> Result<AndroidContext, jni::errors::Error> {
    let application = env
        .call_method(
            context,
            "getApplicationContext",
            "()Landroid/content/Context;",
            &[],
        )?
        .l()?;
    let application = if application.is_null() {
        env.new_global_ref(context)?
    } else {
        env.new_global_ref(application)?
    };
    Ok(AndroidContext {
        vm: env.get_java_vm()?,
        context: application,
    })
}

/// [`IntentHost`] backed by the Android activity manager over JNI.
///
/// Until the app registers its context every call fails with
/// [`HostError::Platform`].
#[derive(Debug, Default, Clone, Copy)]
pub struct JniHost;

impl IntentHost for JniHost {
    fn resolve(&self, intent: &Intent) -> Result<bool, HostError> {
        with_jni(|env, context| match &intent.target {
            // A package "resolves" when it registers a launcher entry point
            IntentTarget::Package(package) => {
                let launch = launch_intent_for_package(env, context, package)?;
                Ok(!launch.is_null())
            }
            _ => {
                let java_intent = build_intent(env, context, intent)?;
                let package_manager = package_manager(env, context)?;
                let component = env
                    .call_method(
                        &java_intent,
                        "resolveActivity",
                        "(Landroid/content/pm/PackageManager;)Landroid/content/ComponentName;",
                        &[JValue::Object(&package_manager)],
                    )?
                    .l()?;
                Ok(!component.is_null())
            }
        })
    }

    fn launch(&self, intent: &Intent) -> Result<(), HostError> {
        with_jni(|env, context| {
            let java_intent = build_intent(env, context, intent)?;

            // context.startActivity(intent)
            env.call_method(
                context,
                "startActivity",
                "(Landroid/content/Intent;)V",
                &[JValue::Object(&java_intent)],
            )?;

            log::debug!("Started {intent}");
            Ok(())
        })
    }
}

/// context.getPackageManager()
fn package_manager<'local>(
    env: &mut JNIEnv<'local>,
    context: &JObject,
) -> Result<JObject<'local>, CallError> {
    let package_manager = env
        .call_method(
            context,
            "getPackageManager",
            "()Landroid/content/pm/PackageManager;",
            &[],
        )?
        .l()?;
    Ok(package_manager)
}

/// packageManager.getLaunchIntentForPackage(package), null when not installed
fn launch_intent_for_package<'local>(
    env: &mut JNIEnv<'local>,
    context: &JObject,
    package: &str,
) -> Result<JObject<'local>, CallError> {
    let package_manager = package_manager(env, context)?;
    let package_name: JObject = env.new_string(package)?.into();
    let launch = env
        .call_method(
            &package_manager,
            "getLaunchIntentForPackage",
            "(Ljava/lang/String;)Landroid/content/Intent;",
            &[JValue::Object(&package_name)],
        )?
        .l()?;
    Ok(launch)
}

fn build_intent<'local>(
    env: &mut JNIEnv<'local>,
    context: &JObject,
    intent: &Intent,
) -> Result<JObject<'local>, CallError> {
    let java_intent = match &intent.target {
        IntentTarget::Action(action) => {
            let action: JObject = env.new_string(action)?.into();
            env.new_object(
                "android/content/Intent",
                "(Ljava/lang/String;)V",
                &[JValue::Object(&action)],
            )?
        }
        IntentTarget::Package(package) => {
            let launch = launch_intent_for_package(env, context, package)?;
            if launch.is_null() {
                return Err(CallError::Host(HostError::ActivityNotFound(
                    intent.to_string(),
                )));
            }
            launch
        }
        IntentTarget::Chooser { inner, title } => {
            let inner = build_intent(env, context, inner)?;
            let title: JObject = env.new_string(title)?.into();
            env.call_static_method(
                "android/content/Intent",
                "createChooser",
                "(Landroid/content/Intent;Ljava/lang/CharSequence;)Landroid/content/Intent;",
                &[JValue::Object(&inner), JValue::Object(&title)],
            )?
            .l()?
        }
    };

    match (&intent.data, &intent.mime_type) {
        (Some(data), Some(mime_type)) => {
            let uri = parse_uri(env, data)?;
            let mime_type: JObject = env.new_string(mime_type)?.into();
            env.call_method(
                &java_intent,
                "setDataAndType",
                "(Landroid/net/Uri;Ljava/lang/String;)Landroid/content/Intent;",
                &[JValue::Object(&uri), JValue::Object(&mime_type)],
            )?;
        }
        (Some(data), None) => {
            let uri = parse_uri(env, data)?;
            env.call_method(
                &java_intent,
                "setData",
                "(Landroid/net/Uri;)Landroid/content/Intent;",
                &[JValue::Object(&uri)],
            )?;
        }
        (None, Some(mime_type)) => {
            let mime_type: JObject = env.new_string(mime_type)?.into();
            env.call_method(
                &java_intent,
                "setType",
                "(Ljava/lang/String;)Landroid/content/Intent;",
                &[JValue::Object(&mime_type)],
            )?;
        }
        (None, None) => {}
    }

    for category in &intent.categories {
        let category: JObject = env.new_string(category)?.into();
        env.call_method(
            &java_intent,
            "addCategory",
            "(Ljava/lang/String;)Landroid/content/Intent;",
            &[JValue::Object(&category)],
        )?;
    }

    env.call_method(
        &java_intent,
        "addFlags",
        "(I)Landroid/content/Intent;",
        &[JValue::Int(intent.flags)],
    )?;

    Ok(java_intent)
}

/// Uri.parse(uri)
fn parse_uri<'local>(env: &mut JNIEnv<'local>, uri: &str) -> Result<JObject<'local>, CallError> {
    let uri_string: JObject = env.new_string(uri)?.into();
    let uri = env
        .call_static_method(
            "android/net/Uri",
            "parse",
            "(Ljava/lang/String;)Landroid/net/Uri;",
            &[JValue::Object(&uri_string)],
        )?
        .l()?;
    Ok(uri)
}

/// Clear the pending Java exception and classify it.
fn take_exception(env: &mut JNIEnv) -> HostError {
    let throwable = match env.exception_occurred() {
        Ok(throwable) => throwable,
        Err(e) => return HostError::Platform(e.to_string()),
    };
    if let Err(e) = env.exception_clear() {
        return HostError::Platform(e.to_string());
    }

    let description = describe_throwable(env, &throwable)
        .unwrap_or_else(|_| "unknown Java exception".to_string());

    if env
        .is_instance_of(&throwable, ACTIVITY_NOT_FOUND_EXCEPTION)
        .unwrap_or(false)
    {
        HostError::ActivityNotFound(description)
    } else if env
        .is_instance_of(&throwable, SECURITY_EXCEPTION)
        .unwrap_or(false)
    {
        HostError::Rejected(description)
    } else {
        HostError::Platform(description)
    }
}

/// throwable.toString()
fn describe_throwable(
    env: &mut JNIEnv,
    throwable: &JThrowable,
) -> Result<String, jni::errors::Error> {
    let description: JString = env
        .call_method(throwable, "toString", "()Ljava/lang/String;", &[])?
        .l()?
        .into();
    let description = env.get_string(&description)?;
    Ok(description.into())
}

/// Helper to run JNI operations with proper error handling
fn with_jni<F, T>(f: F) -> Result<T, HostError>
where
    F: FnOnce(&mut JNIEnv, &JObject) -> Result<T, CallError>,
{
    let Some(android) = ANDROID_CONTEXT.get() else {
        return Err(HostError::Platform(
            "Android context not registered; call AndroidContext.init first".to_string(),
        ));
    };
    let mut env = android
        .vm
        .attach_current_thread()
        .map_err(|e| HostError::Platform(e.to_string()))?;

    match f(&mut env, android.context.as_obj()) {
        Ok(result) => Ok(result),
        Err(CallError::Host(e)) => Err(e),
        Err(CallError::Jni(jni::errors::Error::JavaException)) => Err(take_exception(&mut env)),
        Err(CallError::Jni(e)) => {
            log::error!("JNI error: {e}");
            Err(HostError::Platform(e.to_string()))
        }
    }
}
