use crate::gles::symbol::{Extension, Linkage, Symbol};
use crate::gles::{Error, Result};
use log::*;
use once_cell::sync::OnceCell;

/// Untyped entry point, the same shape `eglGetProcAddress` hands back.
pub type Proc = extern "system" fn();

// Where entry point addresses come from. On device this is EGL,
// in tests it is a recording double.
pub trait ProcLoader: Send + Sync {
    fn get_proc_address(&self, name: &str) -> Option<Proc>;

    // Linked symbols never go through get_proc_address.
    fn linked_address(&self, symbol: Symbol) -> Option<Proc> {
        return crate::gles::linked::address(symbol);
    }
}

// One slot per symbol. A slot is written exactly once, with the
// outcome of the lookup, and never invalidated. OnceCell makes the
// first-use race resolve to a single lookup: concurrent callers
// wait for the winner instead of querying again.
pub struct Registry<L: ProcLoader> {
    loader: L,
    slots: [OnceCell<Option<Proc>>; Symbol::COUNT],
}

impl<L: ProcLoader> Registry<L> {
    pub fn new(loader: L) -> Registry<L> {
        return Registry {
            loader: loader,
            slots: std::array::from_fn(|_| OnceCell::new()),
        };
    }

    pub fn loader(&self) -> &L {
        return &self.loader;
    }

    /// Entry point for `symbol`, looked up on first use.
    /// A failed lookup is cached too, so later calls fail
    /// the same way without asking the loader again.
    pub fn resolve(&self, symbol: Symbol) -> Result<Proc> {
        let slot = &self.slots[symbol.index()];
        let entry = *slot.get_or_init(|| self.lookup(symbol));
        return entry.ok_or(Error::Unsupported(symbol));
    }

    fn lookup(&self, symbol: Symbol) -> Option<Proc> {
        let entry = match symbol.linkage() {
            Linkage::Queried => self.loader.get_proc_address(symbol.name()),
            Linkage::Linked => self.loader.linked_address(symbol),
        };
        match entry {
            Some(_) => debug!("Resolved {} ({:?})", symbol.name(), symbol.linkage()),
            None => warn!("{} is not available, {} calls will fail", symbol.name(), symbol.extension().gl_name()),
        };
        return entry;
    }

    pub fn is_available(&self, symbol: Symbol) -> bool {
        return self.resolve(symbol).is_ok();
    }

    // Whether the slot has been written, successfully or not.
    pub fn is_resolved(&self, symbol: Symbol) -> bool {
        return self.slots[symbol.index()].get().is_some();
    }

    /// True when every function of the group has an entry point.
    /// That alone does not make the extension usable: the loader may
    /// return addresses for names the current context never offered.
    /// See [`ExtensionSet::is_usable`](crate::gles::ExtensionSet::is_usable).
    pub fn supports(&self, extension: Extension) -> bool {
        return extension.symbols().all(|s| self.is_available(s));
    }
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingLoader;
    use super::*;
    use std::sync::{Arc, Barrier};
    use std::thread;

    extern "system" fn noop() {}

    #[test]
    fn resolves_once_per_symbol() {
        let registry = Registry::new(RecordingLoader::empty().with(Symbol::DrawBuffersEXT, noop));
        assert!(!registry.is_resolved(Symbol::DrawBuffersEXT));
        for _ in 0..5 {
            assert!(registry.resolve(Symbol::DrawBuffersEXT).is_ok());
        }
        assert!(registry.is_resolved(Symbol::DrawBuffersEXT));
        assert_eq!(registry.loader().query_count("glDrawBuffersEXT"), 1);
        assert_eq!(registry.loader().total_queries(), 1);
    }

    #[test]
    fn slots_are_independent() {
        let registry = Registry::new(RecordingLoader::everything());
        registry.resolve(Symbol::DrawArraysInstancedNV).unwrap();
        assert!(registry.is_resolved(Symbol::DrawArraysInstancedNV));
        assert!(!registry.is_resolved(Symbol::DrawArraysInstancedEXT));
        assert!(!registry.is_resolved(Symbol::DrawElementsInstancedNV));
    }

    #[test]
    fn missing_entry_is_a_typed_error_and_cached() {
        let registry = Registry::new(RecordingLoader::empty());
        for _ in 0..3 {
            assert_eq!(
                registry.resolve(Symbol::ResolveMultisampleFramebufferAPPLE).err(),
                Some(Error::Unsupported(Symbol::ResolveMultisampleFramebufferAPPLE)),
            );
        }
        assert!(registry.is_resolved(Symbol::ResolveMultisampleFramebufferAPPLE));
        assert_eq!(registry.loader().query_count("glResolveMultisampleFramebufferAPPLE"), 1);
    }

    #[test]
    fn linked_symbols_skip_the_name_query() {
        let registry = Registry::new(RecordingLoader::everything());
        for _ in 0..4 {
            for symbol in Symbol::ALL.iter().filter(|s| s.linkage() == Linkage::Linked) {
                assert!(registry.resolve(*symbol).is_ok());
            }
        }
        assert_eq!(registry.loader().total_queries(), 0);
        assert_eq!(registry.loader().linked_count(Symbol::GenVertexArraysOES), 1);
        assert_eq!(registry.loader().linked_count(Symbol::FramebufferTexture2DMultisampleIMG), 1);
    }

    #[test]
    fn supports_needs_every_function() {
        let registry = Registry::new(RecordingLoader::empty()
            .with(Symbol::RenderbufferStorageMultisampleAPPLE, noop));
        assert!(!registry.supports(Extension::AppleFramebufferMultisample));

        let registry = Registry::new(RecordingLoader::empty()
            .with(Symbol::RenderbufferStorageMultisampleAPPLE, noop)
            .with(Symbol::ResolveMultisampleFramebufferAPPLE, noop));
        assert!(registry.supports(Extension::AppleFramebufferMultisample));
        assert!(!registry.supports(Extension::NvFramebufferMultisample));
    }

    #[test]
    fn concurrent_first_use_looks_up_once() {
        let registry = Arc::new(Registry::new(RecordingLoader::everything()));
        let barrier = Arc::new(Barrier::new(8));
        let handles: Vec<_> = (0..8).map(|_| {
            let registry = registry.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                registry.resolve(Symbol::VertexAttribDivisorANGLE).is_ok()
            })
        }).collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
        assert_eq!(registry.loader().query_count("glVertexAttribDivisorANGLE"), 1);
    }

    #[test]
    fn default_linked_address_is_static() {
        struct NamesOnly;
        impl ProcLoader for NamesOnly {
            fn get_proc_address(&self, _name: &str) -> Option<Proc> {
                panic!("linked symbols must not be queried by name");
            }
        }
        let registry = Registry::new(NamesOnly);
        let res = registry.resolve(Symbol::BindVertexArrayOES);
        if cfg!(target_os = "android") {
            assert!(res.is_ok());
        } else {
            assert_eq!(res.err(), Some(Error::Unsupported(Symbol::BindVertexArrayOES)));
        }
    }
}
