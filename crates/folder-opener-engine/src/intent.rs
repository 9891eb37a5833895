//! Platform-neutral description of an activity launch request.
//!
//! Mirrors the subset of `android.content.Intent` the opener needs, so the
//! cascade can be built and inspected without a JVM.

use std::fmt;
use std::path::Path;

pub const ACTION_VIEW: &str = "android.intent.action.VIEW";
pub const ACTION_GET_CONTENT: &str = "android.intent.action.GET_CONTENT";
pub const ACTION_MAIN: &str = "android.intent.action.MAIN";

pub const CATEGORY_OPENABLE: &str = "android.intent.category.OPENABLE";
pub const CATEGORY_LAUNCHER: &str = "android.intent.category.LAUNCHER";

/// Intent.FLAG_ACTIVITY_NEW_TASK
pub const FLAG_ACTIVITY_NEW_TASK: i32 = 0x10000000;

pub const MIME_FOLDER: &str = "resource/folder";
pub const MIME_ANY: &str = "*/*";

/// What the intent asks the OS to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntentTarget {
    /// An implicit intent matched by action, type and categories.
    Action(String),
    /// The launcher entry point registered by an installed package.
    Package(String),
    /// The system app chooser presented over another intent.
    Chooser { inner: Box<Intent>, title: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intent {
    pub target: IntentTarget,
    pub data: Option<String>,
    pub mime_type: Option<String>,
    pub categories: Vec<String>,
    pub flags: i32,
}

impl Intent {
    fn new(target: IntentTarget) -> Self {
        Self {
            target,
            data: None,
            mime_type: None,
            categories: Vec::new(),
            // Started from a non-activity context, so every launch needs its own task
            flags: FLAG_ACTIVITY_NEW_TASK,
        }
    }

    pub fn action(action: &str) -> Self {
        Self::new(IntentTarget::Action(action.to_string()))
    }

    pub fn launch_package(package: &str) -> Self {
        Self::new(IntentTarget::Package(package.to_string()))
    }

    pub fn chooser(inner: Intent, title: &str) -> Self {
        Self::new(IntentTarget::Chooser {
            inner: Box::new(inner),
            title: title.to_string(),
        })
    }

    pub fn with_data_and_type(mut self, data: String, mime_type: &str) -> Self {
        self.data = Some(data);
        self.mime_type = Some(mime_type.to_string());
        self
    }

    pub fn with_type(mut self, mime_type: &str) -> Self {
        self.mime_type = Some(mime_type.to_string());
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.categories.push(category.to_string());
        self
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.target {
            IntentTarget::Action(action) => write!(f, "{action}")?,
            IntentTarget::Package(package) => write!(f, "launch entry of {package}")?,
            IntentTarget::Chooser { inner, title } => write!(f, "chooser \"{title}\" over [{inner}]")?,
        }
        if let Some(mime_type) = &self.mime_type {
            write!(f, " type={mime_type}")?;
        }
        if let Some(data) = &self.data {
            write!(f, " data={data}")?;
        }
        for category in &self.categories {
            write!(f, " category={category}")?;
        }
        Ok(())
    }
}

/// Build a `file://` URI for an absolute `path`, percent-encoding each segment and keeping separators.
pub fn file_uri(path: &Path) -> String {
    let path = path.to_string_lossy();
    let encoded: Vec<_> = path
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect();
    format!("file://{}", encoded.join("/"))
}
