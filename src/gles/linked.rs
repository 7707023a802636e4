use crate::gles::registry::Proc;
use crate::gles::symbol::Symbol;

// libGLESv2 on Android exports the OES vertex array object and
// IMG multisampled render-to-texture functions directly, so the
// bridge links them instead of querying EGL.
#[cfg(target_os = "android")]
mod native {
    use gl::types::{GLenum, GLint, GLsizei, GLuint, GLboolean};

    #[link(name = "GLESv2")]
    extern "system" {
        pub fn glGenVertexArraysOES(n: GLsizei, arrays: *mut GLuint);
        pub fn glDeleteVertexArraysOES(n: GLsizei, arrays: *const GLuint);
        pub fn glIsVertexArrayOES(array: GLuint) -> GLboolean;
        pub fn glBindVertexArrayOES(array: GLuint);
        pub fn glRenderbufferStorageMultisampleIMG(target: GLenum, samples: GLsizei,
            internalformat: GLenum, width: GLsizei, height: GLsizei);
        pub fn glFramebufferTexture2DMultisampleIMG(target: GLenum, attachment: GLenum,
            textarget: GLenum, texture: GLuint, level: GLint, samples: GLsizei);
    }
}

#[cfg(target_os = "android")]
pub fn address(symbol: Symbol) -> Option<Proc> {
    use native::*;
    let raw: *const () = match symbol {
        Symbol::GenVertexArraysOES => glGenVertexArraysOES as *const (),
        Symbol::DeleteVertexArraysOES => glDeleteVertexArraysOES as *const (),
        Symbol::IsVertexArrayOES => glIsVertexArrayOES as *const (),
        Symbol::BindVertexArrayOES => glBindVertexArrayOES as *const (),
        Symbol::RenderbufferStorageMultisampleIMG => glRenderbufferStorageMultisampleIMG as *const (),
        Symbol::FramebufferTexture2DMultisampleIMG => glFramebufferTexture2DMultisampleIMG as *const (),
        _ => return None,
    };
    // Non-null: these are addresses of linked functions.
    return Some(unsafe { std::mem::transmute::<*const (), Proc>(raw) });
}

// Host builds have no GLES library to link against.
#[cfg(not(target_os = "android"))]
pub fn address(_symbol: Symbol) -> Option<Proc> {
    return None;
}
