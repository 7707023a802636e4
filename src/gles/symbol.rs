// Every extension entry point the bridge knows about, the group
// it belongs to and how its address is obtained.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Linkage {
    // Looked up by name through eglGetProcAddress.
    Queried,
    // Exported by libGLESv2 itself, so the address is known at link time.
    Linked,
}

macro_rules! symbols {
    ($($variant:ident => $name:literal, $ext:ident, $linkage:ident;)*) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Symbol {
            $($variant,)*
        }

        impl Symbol {
            pub const ALL: &'static [Symbol] = &[$(Symbol::$variant,)*];
            pub const COUNT: usize = Symbol::ALL.len();

            /// Native function name as the driver exports it.
            pub fn name(self) -> &'static str {
                return match self {
                    $(Symbol::$variant => $name,)*
                };
            }

            pub fn extension(self) -> Extension {
                return match self {
                    $(Symbol::$variant => Extension::$ext,)*
                };
            }

            pub fn linkage(self) -> Linkage {
                return match self {
                    $(Symbol::$variant => Linkage::$linkage,)*
                };
            }

            pub fn index(self) -> usize {
                return self as usize;
            }
        }
    };
}

symbols! {
    DrawArraysInstancedANGLE => "glDrawArraysInstancedANGLE", AngleInstancedArrays, Queried;
    DrawElementsInstancedANGLE => "glDrawElementsInstancedANGLE", AngleInstancedArrays, Queried;
    VertexAttribDivisorANGLE => "glVertexAttribDivisorANGLE", AngleInstancedArrays, Queried;
    DrawArraysInstancedEXT => "glDrawArraysInstancedEXT", ExtInstancedArrays, Queried;
    DrawElementsInstancedEXT => "glDrawElementsInstancedEXT", ExtInstancedArrays, Queried;
    VertexAttribDivisorEXT => "glVertexAttribDivisorEXT", ExtInstancedArrays, Queried;
    DrawArraysInstancedNV => "glDrawArraysInstancedNV", NvInstancedArrays, Queried;
    DrawElementsInstancedNV => "glDrawElementsInstancedNV", NvInstancedArrays, Queried;
    VertexAttribDivisorNV => "glVertexAttribDivisorNV", NvInstancedArrays, Queried;
    GenVertexArraysOES => "glGenVertexArraysOES", OesVertexArrayObject, Linked;
    DeleteVertexArraysOES => "glDeleteVertexArraysOES", OesVertexArrayObject, Linked;
    IsVertexArrayOES => "glIsVertexArrayOES", OesVertexArrayObject, Linked;
    BindVertexArrayOES => "glBindVertexArrayOES", OesVertexArrayObject, Linked;
    DrawBuffersEXT => "glDrawBuffersEXT", ExtDrawBuffers, Queried;
    DrawBuffersNV => "glDrawBuffersNV", NvDrawBuffers, Queried;
    RenderbufferStorageMultisampleANGLE => "glRenderbufferStorageMultisampleANGLE", AngleFramebufferMultisample, Queried;
    RenderbufferStorageMultisampleNV => "glRenderbufferStorageMultisampleNV", NvFramebufferMultisample, Queried;
    RenderbufferStorageMultisampleAPPLE => "glRenderbufferStorageMultisampleAPPLE", AppleFramebufferMultisample, Queried;
    ResolveMultisampleFramebufferAPPLE => "glResolveMultisampleFramebufferAPPLE", AppleFramebufferMultisample, Queried;
    RenderbufferStorageMultisampleEXT => "glRenderbufferStorageMultisampleEXT", ExtMultisampledRenderToTexture, Queried;
    FramebufferTexture2DMultisampleEXT => "glFramebufferTexture2DMultisampleEXT", ExtMultisampledRenderToTexture, Queried;
    RenderbufferStorageMultisampleIMG => "glRenderbufferStorageMultisampleIMG", ImgMultisampledRenderToTexture, Linked;
    FramebufferTexture2DMultisampleIMG => "glFramebufferTexture2DMultisampleIMG", ImgMultisampledRenderToTexture, Linked;
}

// Extension groups, one per Kotlin `*_native` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extension {
    AngleInstancedArrays,
    ExtInstancedArrays,
    NvInstancedArrays,
    OesVertexArrayObject,
    ExtDrawBuffers,
    NvDrawBuffers,
    AngleFramebufferMultisample,
    NvFramebufferMultisample,
    AppleFramebufferMultisample,
    ExtMultisampledRenderToTexture,
    ImgMultisampledRenderToTexture,
}

impl Extension {
    pub const ALL: &'static [Extension] = &[
        Extension::AngleInstancedArrays,
        Extension::ExtInstancedArrays,
        Extension::NvInstancedArrays,
        Extension::OesVertexArrayObject,
        Extension::ExtDrawBuffers,
        Extension::NvDrawBuffers,
        Extension::AngleFramebufferMultisample,
        Extension::NvFramebufferMultisample,
        Extension::AppleFramebufferMultisample,
        Extension::ExtMultisampledRenderToTexture,
        Extension::ImgMultisampledRenderToTexture,
    ];

    /// Name as advertised in the `GL_EXTENSIONS` string.
    pub fn gl_name(self) -> &'static str {
        return match self {
            Extension::AngleInstancedArrays => "GL_ANGLE_instanced_arrays",
            Extension::ExtInstancedArrays => "GL_EXT_instanced_arrays",
            Extension::NvInstancedArrays => "GL_NV_instanced_arrays",
            Extension::OesVertexArrayObject => "GL_OES_vertex_array_object",
            Extension::ExtDrawBuffers => "GL_EXT_draw_buffers",
            Extension::NvDrawBuffers => "GL_NV_draw_buffers",
            Extension::AngleFramebufferMultisample => "GL_ANGLE_framebuffer_multisample",
            Extension::NvFramebufferMultisample => "GL_NV_framebuffer_multisample",
            Extension::AppleFramebufferMultisample => "GL_APPLE_framebuffer_multisample",
            Extension::ExtMultisampledRenderToTexture => "GL_EXT_multisampled_render_to_texture",
            Extension::ImgMultisampledRenderToTexture => "GL_IMG_multisampled_render_to_texture",
        };
    }

    /// Accepts the name with or without the `GL_` prefix, which is
    /// how the Kotlin side spells it (`ANGLE_instanced_arrays`).
    pub fn from_gl_name(name: &str) -> Option<Extension> {
        let name = name.trim();
        return Extension::ALL.iter().copied().find(|ext| {
            let full = ext.gl_name();
            full == name || &full[3..] == name
        });
    }

    pub fn symbols(self) -> impl Iterator<Item = Symbol> {
        return Symbol::ALL.iter().copied().filter(move |s| s.extension() == self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique_and_carry_vendor_suffix() {
        let names: HashSet<&str> = Symbol::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(names.len(), Symbol::COUNT);
        for symbol in Symbol::ALL {
            let vendor = symbol.extension().gl_name().split('_').nth(1).unwrap();
            assert!(symbol.name().starts_with("gl"), "{}", symbol.name());
            assert!(symbol.name().ends_with(vendor), "{} should end with {}", symbol.name(), vendor);
        }
    }

    #[test]
    fn index_matches_table_position() {
        for (i, symbol) in Symbol::ALL.iter().enumerate() {
            assert_eq!(symbol.index(), i);
        }
    }

    #[test]
    fn only_oes_and_img_are_linked() {
        let linked: Vec<Extension> = Symbol::ALL.iter()
            .filter(|s| s.linkage() == Linkage::Linked)
            .map(|s| s.extension())
            .collect();
        assert_eq!(linked.len(), 6);
        assert!(linked.iter().all(|e| *e == Extension::OesVertexArrayObject
            || *e == Extension::ImgMultisampledRenderToTexture));
    }

    #[test]
    fn every_group_has_functions() {
        let total: usize = Extension::ALL.iter().map(|e| e.symbols().count()).sum();
        assert_eq!(total, Symbol::COUNT);
        assert_eq!(Extension::OesVertexArrayObject.symbols().count(), 4);
        assert_eq!(Extension::NvDrawBuffers.symbols().count(), 1);
        assert_eq!(Extension::AppleFramebufferMultisample.symbols().count(), 2);
    }

    #[test]
    fn gl_name_lookup_accepts_short_form() {
        assert_eq!(Extension::from_gl_name("GL_NV_draw_buffers"), Some(Extension::NvDrawBuffers));
        assert_eq!(Extension::from_gl_name("ANGLE_instanced_arrays"), Some(Extension::AngleInstancedArrays));
        assert_eq!(Extension::from_gl_name("GL_OES_texture_float"), None);
    }
}
