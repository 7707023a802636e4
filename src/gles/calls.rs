// Typed calls through the registry. Each vendor variant of an
// extension shares a native signature, so the variant only picks
// which slot to call through.
//
// All of these are unsafe: they call into the driver and assume
// the caller has a GLES context current on this thread.

use crate::gles::marshal::count_of;
use crate::gles::registry::{Proc, ProcLoader, Registry};
use crate::gles::symbol::Symbol;
use crate::gles::Result;
use core::ffi::c_void;
use gl::types::{GLboolean, GLenum, GLint, GLsizei, GLuint};
use std::mem::transmute;

type DrawArraysInstancedFn = unsafe extern "system" fn(GLenum, GLint, GLsizei, GLsizei);
type DrawElementsInstancedFn = unsafe extern "system" fn(GLenum, GLsizei, GLenum, *const c_void, GLsizei);
type VertexAttribDivisorFn = unsafe extern "system" fn(GLuint, GLuint);
type GenVertexArraysFn = unsafe extern "system" fn(GLsizei, *mut GLuint);
type DeleteVertexArraysFn = unsafe extern "system" fn(GLsizei, *const GLuint);
type IsVertexArrayFn = unsafe extern "system" fn(GLuint) -> GLboolean;
type BindVertexArrayFn = unsafe extern "system" fn(GLuint);
type DrawBuffersFn = unsafe extern "system" fn(GLsizei, *const GLenum);
type RenderbufferStorageMultisampleFn = unsafe extern "system" fn(GLenum, GLsizei, GLenum, GLsizei, GLsizei);
type ResolveMultisampleFramebufferFn = unsafe extern "system" fn();
type FramebufferTexture2DMultisampleFn = unsafe extern "system" fn(GLenum, GLenum, GLenum, GLuint, GLint, GLsizei);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstancedArrays {
    Angle,
    Ext,
    Nv,
}

impl InstancedArrays {
    fn draw_arrays(self) -> Symbol {
        return match self {
            InstancedArrays::Angle => Symbol::DrawArraysInstancedANGLE,
            InstancedArrays::Ext => Symbol::DrawArraysInstancedEXT,
            InstancedArrays::Nv => Symbol::DrawArraysInstancedNV,
        };
    }
    fn draw_elements(self) -> Symbol {
        return match self {
            InstancedArrays::Angle => Symbol::DrawElementsInstancedANGLE,
            InstancedArrays::Ext => Symbol::DrawElementsInstancedEXT,
            InstancedArrays::Nv => Symbol::DrawElementsInstancedNV,
        };
    }
    fn divisor(self) -> Symbol {
        return match self {
            InstancedArrays::Angle => Symbol::VertexAttribDivisorANGLE,
            InstancedArrays::Ext => Symbol::VertexAttribDivisorEXT,
            InstancedArrays::Nv => Symbol::VertexAttribDivisorNV,
        };
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawBuffers {
    Ext,
    Nv,
}

impl DrawBuffers {
    fn symbol(self) -> Symbol {
        return match self {
            DrawBuffers::Ext => Symbol::DrawBuffersEXT,
            DrawBuffers::Nv => Symbol::DrawBuffersNV,
        };
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderbufferMultisample {
    Angle,
    Nv,
    Apple,
    Ext,
    Img,
}

impl RenderbufferMultisample {
    fn symbol(self) -> Symbol {
        return match self {
            RenderbufferMultisample::Angle => Symbol::RenderbufferStorageMultisampleANGLE,
            RenderbufferMultisample::Nv => Symbol::RenderbufferStorageMultisampleNV,
            RenderbufferMultisample::Apple => Symbol::RenderbufferStorageMultisampleAPPLE,
            RenderbufferMultisample::Ext => Symbol::RenderbufferStorageMultisampleEXT,
            RenderbufferMultisample::Img => Symbol::RenderbufferStorageMultisampleIMG,
        };
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramebufferTextureMultisample {
    Ext,
    Img,
}

impl FramebufferTextureMultisample {
    fn symbol(self) -> Symbol {
        return match self {
            FramebufferTextureMultisample::Ext => Symbol::FramebufferTexture2DMultisampleEXT,
            FramebufferTextureMultisample::Img => Symbol::FramebufferTexture2DMultisampleIMG,
        };
    }
}

impl<L: ProcLoader> Registry<L> {
    pub unsafe fn draw_arrays_instanced(&self, ext: InstancedArrays,
      mode: GLenum, first: GLint, count: GLsizei, instance_count: GLsizei) -> Result<()> {
        let f = transmute::<Proc, DrawArraysInstancedFn>(self.resolve(ext.draw_arrays())?);
        f(mode, first, count, instance_count);
        Ok(())
    }

    pub unsafe fn draw_elements_instanced(&self, ext: InstancedArrays,
      mode: GLenum, count: GLsizei, type_: GLenum, indices: *const c_void, primcount: GLsizei) -> Result<()> {
        let f = transmute::<Proc, DrawElementsInstancedFn>(self.resolve(ext.draw_elements())?);
        f(mode, count, type_, indices, primcount);
        Ok(())
    }

    pub unsafe fn vertex_attrib_divisor(&self, ext: InstancedArrays, index: GLuint, divisor: GLuint) -> Result<()> {
        let f = transmute::<Proc, VertexAttribDivisorFn>(self.resolve(ext.divisor())?);
        f(index, divisor);
        Ok(())
    }

    /// Fills every element of `arrays` with a new vertex array name.
    pub unsafe fn gen_vertex_arrays(&self, arrays: &mut [GLuint]) -> Result<()> {
        let f = transmute::<Proc, GenVertexArraysFn>(self.resolve(Symbol::GenVertexArraysOES)?);
        f(count_of(arrays)?, arrays.as_mut_ptr());
        Ok(())
    }

    pub unsafe fn delete_vertex_arrays(&self, arrays: &[GLuint]) -> Result<()> {
        let f = transmute::<Proc, DeleteVertexArraysFn>(self.resolve(Symbol::DeleteVertexArraysOES)?);
        f(count_of(arrays)?, arrays.as_ptr());
        Ok(())
    }

    pub unsafe fn is_vertex_array(&self, array: GLuint) -> Result<GLboolean> {
        let f = transmute::<Proc, IsVertexArrayFn>(self.resolve(Symbol::IsVertexArrayOES)?);
        Ok(f(array))
    }

    pub unsafe fn bind_vertex_array(&self, array: GLuint) -> Result<()> {
        let f = transmute::<Proc, BindVertexArrayFn>(self.resolve(Symbol::BindVertexArrayOES)?);
        f(array);
        Ok(())
    }

    pub unsafe fn draw_buffers(&self, ext: DrawBuffers, bufs: &[GLenum]) -> Result<()> {
        let f = transmute::<Proc, DrawBuffersFn>(self.resolve(ext.symbol())?);
        f(count_of(bufs)?, bufs.as_ptr());
        Ok(())
    }

    pub unsafe fn renderbuffer_storage_multisample(&self, ext: RenderbufferMultisample,
      target: GLenum, samples: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei) -> Result<()> {
        let f = transmute::<Proc, RenderbufferStorageMultisampleFn>(self.resolve(ext.symbol())?);
        f(target, samples, internalformat, width, height);
        Ok(())
    }

    pub unsafe fn resolve_multisample_framebuffer_apple(&self) -> Result<()> {
        let f = transmute::<Proc, ResolveMultisampleFramebufferFn>(
            self.resolve(Symbol::ResolveMultisampleFramebufferAPPLE)?);
        f();
        Ok(())
    }

    pub unsafe fn framebuffer_texture_2d_multisample(&self, ext: FramebufferTextureMultisample,
      target: GLenum, attachment: GLenum, textarget: GLenum, texture: GLuint, level: GLint, samples: GLsizei) -> Result<()> {
        let f = transmute::<Proc, FramebufferTexture2DMultisampleFn>(self.resolve(ext.symbol())?);
        f(target, attachment, textarget, texture, level, samples);
        Ok(())
    }
}
