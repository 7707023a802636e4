use crate::bridge::android::loader::EglLoader;
use crate::bridge::android::{Result, SyncOnceCell};
use crate::gles::Registry;

// The process-wide slot table. Created on the first extension
// call, when a context is current, and kept until exit.
static EXTENSIONS: SyncOnceCell<Registry<EglLoader>> = SyncOnceCell::new();

pub fn extensions() -> Result<&'static Registry<EglLoader>> {
    return EXTENSIONS.get_or_try_init(|| {
        let loader = EglLoader::load()?;
        log::info!("Extension registry ready");
        Ok(Registry::new(loader))
    });
}
