use log::Level;

pub const LOG_TAG: &str = "kmpgl-ext";

pub struct LogConfig {
    pub tag: &'static str,
    pub min_level: Level,
}

impl Default for LogConfig {
    fn default() -> Self {
        return LogConfig { tag: LOG_TAG, min_level: Level::Trace };
    }
}

// Safe to call more than once, only the first call installs.
#[cfg(target_os = "android")]
pub fn init(config: LogConfig) {
    use android_logger::Config;
    android_logger::init_once(
        Config::default().with_min_level(config.min_level).with_tag(config.tag),
    );
}

// Tests and host tools bring their own logger, if any.
#[cfg(not(target_os = "android"))]
pub fn init(config: LogConfig) {
    log::set_max_level(config.min_level.to_level_filter());
}
