use crate::gles::calls::{DrawBuffers, FramebufferTextureMultisample, InstancedArrays, RenderbufferMultisample};
use crate::gles::registry::{ProcLoader, Registry};
use crate::gles::symbol::Extension;
use std::collections::HashSet;

/// Interchangeable vendor variants of one capability, most
/// preferred first.
pub trait Family: Copy + 'static {
    const PREFERENCE: &'static [Self];
    fn extension(self) -> Extension;
}

impl Family for InstancedArrays {
    const PREFERENCE: &'static [Self] = &[InstancedArrays::Angle, InstancedArrays::Ext, InstancedArrays::Nv];

    fn extension(self) -> Extension {
        return match self {
            InstancedArrays::Angle => Extension::AngleInstancedArrays,
            InstancedArrays::Ext => Extension::ExtInstancedArrays,
            InstancedArrays::Nv => Extension::NvInstancedArrays,
        };
    }
}

impl Family for DrawBuffers {
    const PREFERENCE: &'static [Self] = &[DrawBuffers::Ext, DrawBuffers::Nv];

    fn extension(self) -> Extension {
        return match self {
            DrawBuffers::Ext => Extension::ExtDrawBuffers,
            DrawBuffers::Nv => Extension::NvDrawBuffers,
        };
    }
}

// Multisampled renderbuffer storage comes from either the
// render-to-texture groups or the older framebuffer_multisample ones.
impl Family for RenderbufferMultisample {
    const PREFERENCE: &'static [Self] = &[
        RenderbufferMultisample::Ext,
        RenderbufferMultisample::Img,
        RenderbufferMultisample::Angle,
        RenderbufferMultisample::Nv,
        RenderbufferMultisample::Apple,
    ];

    fn extension(self) -> Extension {
        return match self {
            RenderbufferMultisample::Ext => Extension::ExtMultisampledRenderToTexture,
            RenderbufferMultisample::Img => Extension::ImgMultisampledRenderToTexture,
            RenderbufferMultisample::Angle => Extension::AngleFramebufferMultisample,
            RenderbufferMultisample::Nv => Extension::NvFramebufferMultisample,
            RenderbufferMultisample::Apple => Extension::AppleFramebufferMultisample,
        };
    }
}

impl Family for FramebufferTextureMultisample {
    const PREFERENCE: &'static [Self] = &[FramebufferTextureMultisample::Ext, FramebufferTextureMultisample::Img];

    fn extension(self) -> Extension {
        return match self {
            FramebufferTextureMultisample::Ext => Extension::ExtMultisampledRenderToTexture,
            FramebufferTextureMultisample::Img => Extension::ImgMultisampledRenderToTexture,
        };
    }
}

// The space separated GL_EXTENSIONS string, as the managed side
// reads it to decide which extension objects to hand out.
#[derive(Debug, Clone, Default)]
pub struct ExtensionSet {
    names: HashSet<String>,
}

impl ExtensionSet {
    pub fn parse(extensions: &str) -> ExtensionSet {
        return ExtensionSet {
            names: extensions.split_whitespace().map(String::from).collect(),
        };
    }

    pub fn contains(&self, name: &str) -> bool {
        return self.names.contains(name);
    }

    pub fn advertises(&self, extension: Extension) -> bool {
        return self.contains(extension.gl_name());
    }

    /// Advertised groups this bridge has entry points for.
    pub fn known(&self) -> impl Iterator<Item = Extension> + '_ {
        return Extension::ALL.iter().copied().filter(move |e| self.advertises(*e));
    }

    // Advertised and backed by resolvable entry points. Neither alone
    // is enough: drivers occasionally list an extension without
    // exporting every function, and eglGetProcAddress may hand out
    // pointers for extensions the context never offered.
    pub fn is_usable<L: ProcLoader>(&self, extension: Extension, registry: &Registry<L>) -> bool {
        return self.advertises(extension) && registry.supports(extension);
    }

    pub fn usable<L: ProcLoader>(&self, registry: &Registry<L>) -> Vec<Extension> {
        return self.known().filter(|e| registry.supports(*e)).collect();
    }

    /// The first usable variant of `F` in preference order.
    pub fn preferred<F: Family, L: ProcLoader>(&self, registry: &Registry<L>) -> Option<F> {
        return F::PREFERENCE.iter().copied().find(|v| self.is_usable(v.extension(), registry));
    }

    pub fn len(&self) -> usize {
        return self.names.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.names.is_empty();
    }
}
