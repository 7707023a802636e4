use crate::gles::{Error, Result};
use core::ffi::c_void;
use gl::types::{GLenum, GLsizei, GLuint};

// Managed callers hand every argument over as a signed 32-bit
// word. These reinterpret the bits for the native parameter type
// without any range checks.

pub fn to_enum(word: i32) -> GLenum {
    return word as GLenum;
}

pub fn to_handle(word: i32) -> GLuint {
    return word as GLuint;
}

/// Byte offset into the bound element array buffer as the
/// `indices` pointer GLES expects. Zero is null.
pub fn offset_address(offset: i32) -> *const c_void {
    return offset as isize as usize as *const c_void;
}

pub fn words_as_unsigned(words: &[i32]) -> &[u32] {
    // Same size and alignment, every bit pattern valid.
    return unsafe { std::slice::from_raw_parts(words.as_ptr() as *const u32, words.len()) };
}

pub fn words_as_unsigned_mut(words: &mut [i32]) -> &mut [u32] {
    return unsafe { std::slice::from_raw_parts_mut(words.as_mut_ptr() as *mut u32, words.len()) };
}

/// Element count of a slice as the native size type.
pub fn count_of<T>(elements: &[T]) -> Result<GLsizei> {
    return GLsizei::try_from(elements.len()).map_err(|_| Error::NumericConversionError);
}

/// Checks a caller supplied count against the array it refers to.
pub fn checked_count(requested: i32, len: usize) -> Result<usize> {
    let requested = usize::try_from(requested).map_err(|_| Error::NumericConversionError)?;
    if requested > len {
        return Err(Error::ArrayTooShort { requested: requested, len: len });
    }
    return Ok(requested);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_keep_their_bits() {
        assert_eq!(to_enum(0x8CE0), 0x8CE0);
        assert_eq!(to_enum(-1), u32::MAX);
        assert_eq!(to_handle(i32::MIN), 0x8000_0000);
    }

    #[test]
    fn offsets_map_to_addresses() {
        assert!(offset_address(0).is_null());
        assert_eq!(offset_address(24) as usize, 24);
        assert_eq!(offset_address(i32::MAX) as usize, i32::MAX as usize);
    }

    #[test]
    fn unsigned_view_preserves_order() {
        let words = [0x8CE0, 0x8CE1, -1];
        assert_eq!(words_as_unsigned(&words), &[0x8CE0, 0x8CE1, u32::MAX]);
        let mut out = [0; 2];
        words_as_unsigned_mut(&mut out).copy_from_slice(&[7, 9]);
        assert_eq!(out, [7, 9]);
    }

    #[test]
    fn counts_are_checked() {
        assert_eq!(checked_count(3, 3), Ok(3));
        assert_eq!(checked_count(0, 0), Ok(0));
        assert_eq!(checked_count(4, 3), Err(Error::ArrayTooShort { requested: 4, len: 3 }));
        assert_eq!(checked_count(-1, 3), Err(Error::NumericConversionError));
        assert_eq!(count_of(&[1u32, 2]), Ok(2));
    }
}
