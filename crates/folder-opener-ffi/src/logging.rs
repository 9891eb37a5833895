/// Install the platform logger. Safe to call more than once.
///
/// On Android, logs go to logcat under the `FolderOpener` tag.
/// Elsewhere, `env_logger` at info level, overridable with `RUST_LOG`.
#[uniffi::export]
pub fn init_logging() {
    #[cfg(target_os = "android")]
    {
        android_logger::init_once(
            android_logger::Config::default()
                .with_max_level(log::LevelFilter::Debug)
                .with_tag("FolderOpener"),
        );
    }

    #[cfg(not(target_os = "android"))]
    {
        // A logger may already be installed by the host process
        let _ = env_logger::Builder::new()
            .filter_level(log::LevelFilter::Info)
            .parse_default_env()
            .try_init();
    }

    log::debug!("folder-opener logging initialised");
}
