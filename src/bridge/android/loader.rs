use crate::bridge::android::{Error, Result};
use crate::gles::{Proc, ProcLoader};
use khronos_egl as egl;

type EglInstance = egl::Instance<egl::Dynamic<libloading::Library, egl::EGL1_0>>;

// eglGetProcAddress through a dynamically loaded libEGL. The
// instance is a Library plus function pointers, so it is Send and
// Sync as is, and eglGetProcAddress needs no current context.
pub struct EglLoader {
    api: EglInstance,
}

impl EglLoader {
    pub fn load() -> Result<EglLoader> {
        let api = match unsafe { egl::DynamicInstance::<egl::EGL1_0>::load_required() } {
            Ok(api) => Ok(api),
            Err(e) => {
                log::error!("Unable to load libEGL: {:?}", e);
                Err(Error::EGLInvalidLibrary)
            },
        }?;
        return Ok(EglLoader { api: api });
    }
}

impl ProcLoader for EglLoader {
    fn get_proc_address(&self, name: &str) -> Option<Proc> {
        // khronos-egl hands back extern "C"; on Android that ABI is identical to "system".
        return self.api
            .get_proc_address(name)
            .map(|f| unsafe { std::mem::transmute::<extern "C" fn(), Proc>(f) });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn loader_is_shareable_without_unsafe_impls() {
        assert_send_sync::<EglLoader>();
    }
}
