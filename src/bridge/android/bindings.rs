#![allow(non_snake_case)]

use crate::bridge::android::arrays::{read_all, read_prefix, write_prefix, JavaIntArray};
use crate::bridge::android::globals::extensions;
use crate::bridge::android::loader::EglLoader;
use crate::bridge::android::{Error, Result};
use crate::gles::marshal::{offset_address, to_enum, to_handle, words_as_unsigned, words_as_unsigned_mut};
use crate::gles::{
    DrawBuffers, Extension, ExtensionSet, FramebufferTextureMultisample,
    InstancedArrays, RenderbufferMultisample, Registry,
};
use crate::logging::{self, LogConfig};
use jni::objects::{JObject, JString};
use jni::sys::{jboolean, jint, jintArray, jstring, JNI_FALSE, JNI_TRUE, JNI_VERSION_1_6};
use jni::{JNIEnv, JavaVM};
use log::*;
use std::ffi::c_void;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr::null_mut;

#[no_mangle]
extern "system" fn JNI_OnLoad(_vm: JavaVM, _reserved: *mut c_void) -> jint {
    logging::init(LogConfig::default());
    info!("opengl-extensions loaded");
    return JNI_VERSION_1_6;
}

// A failed JNI call usually left its own exception behind, and
// that one is the more specific.
fn exception_to_throw(e: &Error, pending: bool) -> Option<&'static str> {
    if pending {
        return None;
    }
    return Some(e.exception_class());
}

fn throw(env: &JNIEnv, e: &Error) {
    let class = match exception_to_throw(e, env.exception_check().unwrap_or(true)) {
        Some(class) => class,
        None => return,
    };
    match env.throw_new(class, e.to_string()) {
        Err(e) => error!("Unable to throw {}: {:?}", class, e),
        Ok(_) => {},
    };
}

// Runs one entry point. Errors and panics never cross into the
// JVM as faults: they become Java exceptions and `fallback` is
// returned instead.
fn guarded<T, F>(env: &JNIEnv, name: &str, fallback: T, f: F) -> T
where F: FnOnce(&'static Registry<EglLoader>) -> Result<T> {
    let res = catch_unwind(AssertUnwindSafe(|| -> Result<T> {
        f(extensions()?)
    }));
    return match res {
        Ok(Ok(v)) => v,
        Ok(Err(e)) => {
            error!("{} failed: {}", name, e);
            throw(env, &e);
            fallback
        },
        Err(_) => {
            error!("{} panicked", name);
            if !env.exception_check().unwrap_or(false) {
                let _ = env.throw_new("java/lang/RuntimeException", format!("{} panicked", name));
            }
            fallback
        },
    };
}

fn draw_arrays_instanced(env: JNIEnv, name: &str, ext: InstancedArrays,
  mode: jint, first: jint, count: jint, instance_count: jint) {
    guarded(&env, name, (), |gl| unsafe {
        Ok(gl.draw_arrays_instanced(ext, to_enum(mode), first, count, instance_count)?)
    });
}

fn draw_elements_instanced(env: JNIEnv, name: &str, ext: InstancedArrays,
  mode: jint, count: jint, type_: jint, offset: jint, primcount: jint) {
    guarded(&env, name, (), |gl| unsafe {
        Ok(gl.draw_elements_instanced(ext, to_enum(mode), count, to_enum(type_), offset_address(offset), primcount)?)
    });
}

fn vertex_attrib_divisor(env: JNIEnv, name: &str, ext: InstancedArrays, index: jint, divisor: jint) {
    guarded(&env, name, (), |gl| unsafe {
        Ok(gl.vertex_attrib_divisor(ext, to_handle(index), to_handle(divisor))?)
    });
}

fn draw_buffers(env: JNIEnv, name: &str, ext: DrawBuffers, bufs: jintArray) {
    guarded(&env, name, (), |gl| {
        read_all(&JavaIntArray::new(&env, bufs), |words| {
            unsafe { gl.draw_buffers(ext, words_as_unsigned(words))?; }
            Ok(())
        })
    });
}

fn renderbuffer_storage_multisample(env: JNIEnv, name: &str, ext: RenderbufferMultisample,
  target: jint, samples: jint, internalformat: jint, width: jint, height: jint) {
    guarded(&env, name, (), |gl| unsafe {
        Ok(gl.renderbuffer_storage_multisample(ext, to_enum(target), samples, to_enum(internalformat), width, height)?)
    });
}

fn framebuffer_texture_2d_multisample(env: JNIEnv, name: &str, ext: FramebufferTextureMultisample,
  target: jint, attachment: jint, textarget: jint, texture: jint, level: jint, samples: jint) {
    guarded(&env, name, (), |gl| unsafe {
        Ok(gl.framebuffer_texture_2d_multisample(ext, to_enum(target), to_enum(attachment),
            to_enum(textarget), to_handle(texture), level, samples)?)
    });
}

////////// ANGLE_instanced_arrays_native //////////

#[no_mangle]
extern "system" fn Java_edu_moravian_kmpgl_core_ANGLE_1instanced_1arrays_1native_glDrawArraysInstancedANGLE(
  env: JNIEnv, _this: JObject, mode: jint, first: jint, count: jint, instance_count: jint) {
    draw_arrays_instanced(env, "glDrawArraysInstancedANGLE", InstancedArrays::Angle, mode, first, count, instance_count);
}

#[no_mangle]
extern "system" fn Java_edu_moravian_kmpgl_core_ANGLE_1instanced_1arrays_1native_glDrawElementsInstancedANGLE(
  env: JNIEnv, _this: JObject, mode: jint, count: jint, type_: jint, offset: jint, primcount: jint) {
    draw_elements_instanced(env, "glDrawElementsInstancedANGLE", InstancedArrays::Angle, mode, count, type_, offset, primcount);
}

#[no_mangle]
extern "system" fn Java_edu_moravian_kmpgl_core_ANGLE_1instanced_1arrays_1native_glVertexAttribDivisorANGLE(
  env: JNIEnv, _this: JObject, index: jint, divisor: jint) {
    vertex_attrib_divisor(env, "glVertexAttribDivisorANGLE", InstancedArrays::Angle, index, divisor);
}

////////// EXT_instanced_arrays_native //////////

#[no_mangle]
extern "system" fn Java_edu_moravian_kmpgl_core_EXT_1instanced_1arrays_1native_glDrawArraysInstancedEXT(
  env: JNIEnv, _this: JObject, mode: jint, first: jint, count: jint, instance_count: jint) {
    draw_arrays_instanced(env, "glDrawArraysInstancedEXT", InstancedArrays::Ext, mode, first, count, instance_count);
}

#[no_mangle]
extern "system" fn Java_edu_moravian_kmpgl_core_EXT_1instanced_1arrays_1native_glDrawElementsInstancedEXT(
  env: JNIEnv, _this: JObject, mode: jint, count: jint, type_: jint, offset: jint, primcount: jint) {
    draw_elements_instanced(env, "glDrawElementsInstancedEXT", InstancedArrays::Ext, mode, count, type_, offset, primcount);
}

#[no_mangle]
extern "system" fn Java_edu_moravian_kmpgl_core_EXT_1instanced_1arrays_1native_glVertexAttribDivisorEXT(
  env: JNIEnv, _this: JObject, index: jint, divisor: jint) {
    vertex_attrib_divisor(env, "glVertexAttribDivisorEXT", InstancedArrays::Ext, index, divisor);
}

////////// NV_instanced_arrays_native //////////

#[no_mangle]
extern "system" fn Java_edu_moravian_kmpgl_core_NV_1instanced_1arrays_1native_glDrawArraysInstancedNV(
  env: JNIEnv, _this: JObject, mode: jint, first: jint, count: jint, instance_count: jint) {
    draw_arrays_instanced(env, "glDrawArraysInstancedNV", InstancedArrays::Nv, mode, first, count, instance_count);
}

#[no_mangle]
extern "system" fn Java_edu_moravian_kmpgl_core_NV_1instanced_1arrays_1native_glDrawElementsInstancedNV(
  env: JNIEnv, _this: JObject, mode: jint, count: jint, type_: jint, offset: jint, primcount: jint) {
    draw_elements_instanced(env, "glDrawElementsInstancedNV", InstancedArrays::Nv, mode, count, type_, offset, primcount);
}

#[no_mangle]
extern "system" fn Java_edu_moravian_kmpgl_core_NV_1instanced_1arrays_1native_glVertexAttribDivisorNV(
  env: JNIEnv, _this: JObject, index: jint, divisor: jint) {
    vertex_attrib_divisor(env, "glVertexAttribDivisorNV", InstancedArrays::Nv, index, divisor);
}

////////// OES_vertex_array_object_native //////////

// Returns `out` so the Kotlin declaration (which expects the
// filled array back) gets a real object.
#[no_mangle]
extern "system" fn Java_edu_moravian_kmpgl_core_OES_1vertex_1array_1object_1native_glGenVertexArraysOES(
  env: JNIEnv, _this: JObject, n: jint, out: jintArray) -> jintArray {
    return guarded(&env, "glGenVertexArraysOES", null_mut(), |gl| {
        write_prefix(&JavaIntArray::new(&env, out), n, |words| {
            unsafe { gl.gen_vertex_arrays(words_as_unsigned_mut(words))?; }
            Ok(out)
        })
    });
}

#[no_mangle]
extern "system" fn Java_edu_moravian_kmpgl_core_OES_1vertex_1array_1object_1native_glDeleteVertexArraysOES(
  env: JNIEnv, _this: JObject, n: jint, arrays: jintArray) {
    guarded(&env, "glDeleteVertexArraysOES", (), |gl| {
        read_prefix(&JavaIntArray::new(&env, arrays), n, |words| {
            unsafe { gl.delete_vertex_arrays(words_as_unsigned(words))?; }
            Ok(())
        })
    });
}

#[no_mangle]
extern "system" fn Java_edu_moravian_kmpgl_core_OES_1vertex_1array_1object_1native_glIsVertexArrayOES(
  env: JNIEnv, _this: JObject, array: jint) -> jint {
    return guarded(&env, "glIsVertexArrayOES", 0, |gl| unsafe {
        Ok(gl.is_vertex_array(to_handle(array))? as jint)
    });
}

#[no_mangle]
extern "system" fn Java_edu_moravian_kmpgl_core_OES_1vertex_1array_1object_1native_glBindVertexArrayOES(
  env: JNIEnv, _this: JObject, array: jint) {
    guarded(&env, "glBindVertexArrayOES", (), |gl| unsafe {
        Ok(gl.bind_vertex_array(to_handle(array))?)
    });
}

////////// EXT_draw_buffers_native / NV_draw_buffers_native //////////

#[no_mangle]
extern "system" fn Java_edu_moravian_kmpgl_core_EXT_1draw_1buffers_1native_glDrawBuffersEXT(
  env: JNIEnv, _this: JObject, bufs: jintArray) {
    draw_buffers(env, "glDrawBuffersEXT", DrawBuffers::Ext, bufs);
}

#[no_mangle]
extern "system" fn Java_edu_moravian_kmpgl_core_NV_1draw_1buffers_1native_glDrawBuffersNV(
  env: JNIEnv, _this: JObject, bufs: jintArray) {
    draw_buffers(env, "glDrawBuffersNV", DrawBuffers::Nv, bufs);
}

////////// *_framebuffer_multisample_native //////////

#[no_mangle]
extern "system" fn Java_edu_moravian_kmpgl_core_ANGLE_1framebuffer_1multisample_1native_glRenderbufferStorageMultisampleANGLE(
  env: JNIEnv, _this: JObject, target: jint, samples: jint, internalformat: jint, width: jint, height: jint) {
    renderbuffer_storage_multisample(env, "glRenderbufferStorageMultisampleANGLE",
        RenderbufferMultisample::Angle, target, samples, internalformat, width, height);
}

#[no_mangle]
extern "system" fn Java_edu_moravian_kmpgl_core_NV_1framebuffer_1multisample_1native_glRenderbufferStorageMultisampleNV(
  env: JNIEnv, _this: JObject, target: jint, samples: jint, internalformat: jint, width: jint, height: jint) {
    renderbuffer_storage_multisample(env, "glRenderbufferStorageMultisampleNV",
        RenderbufferMultisample::Nv, target, samples, internalformat, width, height);
}

#[no_mangle]
extern "system" fn Java_edu_moravian_kmpgl_core_APPLE_1framebuffer_1multisample_1native_glRenderbufferStorageMultisampleAPPLE(
  env: JNIEnv, _this: JObject, target: jint, samples: jint, internalformat: jint, width: jint, height: jint) {
    renderbuffer_storage_multisample(env, "glRenderbufferStorageMultisampleAPPLE",
        RenderbufferMultisample::Apple, target, samples, internalformat, width, height);
}

#[no_mangle]
extern "system" fn Java_edu_moravian_kmpgl_core_APPLE_1framebuffer_1multisample_1native_glResolveMultisampleFramebufferAPPLE(
  env: JNIEnv, _this: JObject) {
    guarded(&env, "glResolveMultisampleFramebufferAPPLE", (), |gl| unsafe {
        Ok(gl.resolve_multisample_framebuffer_apple()?)
    });
}

////////// *_multisampled_render_to_texture_native //////////

#[no_mangle]
extern "system" fn Java_edu_moravian_kmpgl_core_EXT_1multisampled_1render_1to_1texture_1native_glRenderbufferStorageMultisampleEXT(
  env: JNIEnv, _this: JObject, target: jint, samples: jint, internalformat: jint, width: jint, height: jint) {
    renderbuffer_storage_multisample(env, "glRenderbufferStorageMultisampleEXT",
        RenderbufferMultisample::Ext, target, samples, internalformat, width, height);
}

#[no_mangle]
extern "system" fn Java_edu_moravian_kmpgl_core_EXT_1multisampled_1render_1to_1texture_1native_glFramebufferTexture2DMultisampleEXT(
  env: JNIEnv, _this: JObject, target: jint, attachment: jint, textarget: jint, texture: jint, level: jint, samples: jint) {
    framebuffer_texture_2d_multisample(env, "glFramebufferTexture2DMultisampleEXT",
        FramebufferTextureMultisample::Ext, target, attachment, textarget, texture, level, samples);
}

#[no_mangle]
extern "system" fn Java_edu_moravian_kmpgl_core_IMG_1multisampled_1render_1to_1texture_1native_glRenderbufferStorageMultisampleIMG(
  env: JNIEnv, _this: JObject, target: jint, samples: jint, internalformat: jint, width: jint, height: jint) {
    renderbuffer_storage_multisample(env, "glRenderbufferStorageMultisampleIMG",
        RenderbufferMultisample::Img, target, samples, internalformat, width, height);
}

#[no_mangle]
extern "system" fn Java_edu_moravian_kmpgl_core_IMG_1multisampled_1render_1to_1texture_1native_glFramebufferTexture2DMultisampleIMG(
  env: JNIEnv, _this: JObject, target: jint, attachment: jint, textarget: jint, texture: jint, level: jint, samples: jint) {
    framebuffer_texture_2d_multisample(env, "glFramebufferTexture2DMultisampleIMG",
        FramebufferTextureMultisample::Img, target, attachment, textarget, texture, level, samples);
}

////////// GLExtensions //////////

// Lets managed code test a group without provoking an exception.
// `extensions` is the context's GL_EXTENSIONS string: a group counts
// only if it is advertised there and all of its functions resolve.
#[no_mangle]
extern "system" fn Java_edu_moravian_kmpgl_core_GLExtensions_nativeHasEntryPoints(
  env: JNIEnv, _this: JObject, name: JString, extensions: JString) -> jboolean {
    return guarded(&env, "nativeHasEntryPoints", JNI_FALSE, |gl| {
        let java_name = env.get_string(name)?;
        let name = java_name.to_str()?;
        let ext = match Extension::from_gl_name(name) {
            Some(ext) => ext,
            None => return Err(Error::UnknownExtension(String::from(name))),
        };
        let java_extensions = env.get_string(extensions)?;
        let set = ExtensionSet::parse(java_extensions.to_str()?);
        Ok(if set.is_usable(ext, gl) { JNI_TRUE } else { JNI_FALSE })
    });
}

// Filters a GL_EXTENSIONS string down to the bridged groups whose
// entry points all resolve, space separated.
#[no_mangle]
extern "system" fn Java_edu_moravian_kmpgl_core_GLExtensions_nativeUsableExtensions(
  env: JNIEnv, _this: JObject, extensions: JString) -> jstring {
    return guarded(&env, "nativeUsableExtensions", null_mut(), |gl| {
        let java_extensions = env.get_string(extensions)?;
        let set = ExtensionSet::parse(java_extensions.to_str()?);
        let usable: Vec<&str> = set.usable(gl).into_iter().map(|e| e.gl_name()).collect();
        let joined = env.new_string(usable.join(" "))?;
        Ok(**joined)
    });
}
