use build_target;
use build_target::{Arch, Os};
use std::env;
use std::path::Path;

const DEFAULT_NDK_API: &str = "33";
const CLANG_VERSION: &str = "14.0.6";

fn android_host_dir() -> &'static str {
    let host = env::var("HOST").unwrap();
    if host.contains("aarch64") || host.contains("arm") || host.contains("thumb") {
        panic!("AArch64/ARM/Thumb hosts are unimplemented.");
    }
    return match host.as_str() {
        "x86_64-pc-windows-gnu" | "x86_64-pc-windows-msvc" => "windows-x86_64",
        "x86_64-apple-darwin" => "darwin-x86_64",
        _ => "linux-x86_64"
    };
}

fn link_android_sysroot() {
    let archstr = match build_target::target_arch().unwrap() {
        Arch::AARCH64 => "aarch64",
        Arch::ARM => "arm",
        Arch::X86 => "i686",
        Arch::X86_64 => "x86_64",
        _ => panic!("Unknown arch!")
    };
    let clang_archstr = match archstr {
        "i686" => "i386",
        _ => archstr
    };
    let abi_suffix = match archstr {
        "arm" => "eabi",
        _ => ""
    };
    // Without an NDK we rely on the linker already knowing
    // where libEGL and libGLESv2 live (cargo-ndk sets this up).
    let ndk = match env::var("ANDROID_NDK_HOME") {
        Ok(ndk) => ndk,
        Err(_) => {
            println!("cargo:warning=ANDROID_NDK_HOME is not set, using the default linker search path");
            return;
        }
    };
    let ndk_api_ver = env::var("KMPGL_NDK_API").unwrap_or(String::from(DEFAULT_NDK_API));
    let toolchain_dir = Path::new(&ndk).join("toolchains").join("llvm").join("prebuilt").join(android_host_dir());
    let libgcc_path = Path::new(&toolchain_dir).join("lib64").join("clang").join(CLANG_VERSION).join("lib").join("linux").join(clang_archstr);
    let libandroid_path = Path::new(&toolchain_dir).join("sysroot").join("usr").join("lib").join(format!("{}-linux-android{}", archstr, abi_suffix)).join(ndk_api_ver);
    println!("cargo:rustc-flags=-L{} -L{}", libgcc_path.as_os_str().to_str().unwrap(), libandroid_path.as_os_str().to_str().unwrap());
}

// Packaging: the cdylib comes out as libopengl_extensions.so but the
// managed side calls System.loadLibrary("opengl-extensions"). Copy it
// into src/main/jniLibs/<abi>/libopengl-extensions.so (or change the
// loadLibrary argument to "opengl_extensions").
fn main() {
    println!("cargo:rerun-if-env-changed=ANDROID_NDK_HOME");
    println!("cargo:rerun-if-env-changed=KMPGL_NDK_API");
    match build_target::target_os().unwrap() {
        Os::Android => link_android_sysroot(),
        Os::iOs => {
            panic!("iOS build unsupported...");
        },
        // Host builds only carry the platform-independent
        // core, which needs nothing from the NDK.
        _ => {}
    }
}
