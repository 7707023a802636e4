use crate::bridge::android::{Error, Result};
use crate::gles;
use crate::gles::marshal::checked_count;
use jni::objects::ReleaseMode;
use jni::sys::{jint, jintArray};
use jni::JNIEnv;

// What the bridge needs from a Java int[].
pub trait IntRegion {
    fn len(&self) -> Result<usize>;

    // The first `count` elements, valid only for the duration of `f`.
    fn with_prefix<T, F>(&self, count: usize, f: F) -> Result<T>
    where F: FnOnce(&[jint]) -> Result<T>;

    // Overwrites the first `values.len()` elements.
    fn set_region(&self, values: &[jint]) -> Result<()>;
}

pub struct JavaIntArray<'a> {
    env: &'a JNIEnv<'a>,
    array: jintArray,
}

impl<'a> JavaIntArray<'a> {
    pub fn new(env: &'a JNIEnv<'a>, array: jintArray) -> JavaIntArray<'a> {
        return JavaIntArray { env: env, array: array };
    }
}

impl IntRegion for JavaIntArray<'_> {
    fn len(&self) -> Result<usize> {
        return Ok(self.env.get_array_length(self.array)? as usize);
    }

    fn with_prefix<T, F>(&self, count: usize, f: F) -> Result<T>
    where F: FnOnce(&[jint]) -> Result<T> {
        if count == 0 {
            return f(&[]);
        }
        // Pinned or copied by the VM and released without copy-back
        // when `elements` drops, whichever way `f` returns.
        let elements = self.env.get_int_array_elements(self.array, ReleaseMode::NoCopyBack)?;
        let len = elements.size()? as usize;
        if count > len {
            return Err(Error::from(gles::Error::ArrayTooShort { requested: count, len: len }));
        }
        let slice = unsafe { std::slice::from_raw_parts(elements.as_ptr() as *const jint, count) };
        return f(slice);
    }

    fn set_region(&self, values: &[jint]) -> Result<()> {
        self.env.set_int_array_region(self.array, 0, values)?;
        Ok(())
    }
}

/// The whole array, read-only.
pub fn read_all<R: IntRegion, T, F>(array: &R, f: F) -> Result<T>
where F: FnOnce(&[jint]) -> Result<T> {
    let len = array.len()?;
    return array.with_prefix(len, f);
}

/// The first `count` elements. Fails when the array is
/// shorter than the count the caller claims.
pub fn read_prefix<R: IntRegion, T, F>(array: &R, count: jint, f: F) -> Result<T>
where F: FnOnce(&[jint]) -> Result<T> {
    let count = checked_count(count, array.len()?)?;
    return array.with_prefix(count, f);
}

/// `count` zeroed elements for `f` to fill. They reach the
/// array only when `f` succeeds.
pub fn write_prefix<R: IntRegion, T, F>(array: &R, count: jint, f: F) -> Result<T>
where F: FnOnce(&mut [jint]) -> Result<T> {
    let count = checked_count(count, array.len()?)?;
    let mut data = vec![0; count];
    let res = f(&mut data)?;
    if count > 0 {
        array.set_region(&data)?;
    }
    Ok(res)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gles::Symbol;
    use std::cell::RefCell;

    struct FakeArray {
        data: RefCell<Vec<jint>>,
        writes: RefCell<Vec<Vec<jint>>>,
    }

    impl FakeArray {
        fn new(data: &[jint]) -> FakeArray {
            return FakeArray { data: RefCell::new(data.to_vec()), writes: RefCell::new(vec![]) };
        }
    }

    impl IntRegion for FakeArray {
        fn len(&self) -> Result<usize> {
            return Ok(self.data.borrow().len());
        }

        fn with_prefix<T, F>(&self, count: usize, f: F) -> Result<T>
        where F: FnOnce(&[jint]) -> Result<T> {
            let data = self.data.borrow();
            return f(&data[..count]);
        }

        fn set_region(&self, values: &[jint]) -> Result<()> {
            self.data.borrow_mut()[..values.len()].copy_from_slice(values);
            self.writes.borrow_mut().push(values.to_vec());
            Ok(())
        }
    }

    #[test]
    fn read_all_sees_every_element_in_order() {
        let array = FakeArray::new(&[0x8CE0, 0, 0x8CE2]);
        let seen = read_all(&array, |words| Ok(words.to_vec())).unwrap();
        assert_eq!(seen, vec![0x8CE0, 0, 0x8CE2]);
        assert_eq!(read_all(&FakeArray::new(&[]), |words| Ok(words.len())).unwrap(), 0);
    }

    #[test]
    fn read_prefix_limits_to_count() {
        let array = FakeArray::new(&[5, 6, 7, 8]);
        let seen = read_prefix(&array, 2, |words| Ok(words.to_vec())).unwrap();
        assert_eq!(seen, vec![5, 6]);
    }

    #[test]
    fn read_prefix_rejects_short_arrays() {
        let array = FakeArray::new(&[1, 2, 3]);
        let mut called = false;
        let res = read_prefix(&array, 4, |_| { called = true; Ok(()) });
        assert!(matches!(res, Err(Error::Gles(gles::Error::ArrayTooShort { requested: 4, len: 3 }))));
        assert!(!called);
    }

    #[test]
    fn write_prefix_rejects_negative_counts() {
        let array = FakeArray::new(&[1, 2, 3]);
        let res = write_prefix(&array, -1, |_| Ok(()));
        assert!(matches!(res, Err(Error::Gles(gles::Error::NumericConversionError))));
        assert!(array.writes.borrow().is_empty());
    }

    #[test]
    fn write_prefix_commits_exactly_count_elements() {
        let array = FakeArray::new(&[-1, -1, -1, -1, -1]);
        write_prefix(&array, 2, |out| {
            assert_eq!(out.len(), 2);
            out.copy_from_slice(&[100, 101]);
            Ok(())
        }).unwrap();
        assert_eq!(*array.writes.borrow(), vec![vec![100, 101]]);
        assert_eq!(*array.data.borrow(), vec![100, 101, -1, -1, -1]);
    }

    #[test]
    fn write_prefix_skips_commit_on_error() {
        let array = FakeArray::new(&[9, 9]);
        let res: Result<()> = write_prefix(&array, 2, |out| {
            out[0] = 1;
            Err(Error::from(gles::Error::Unsupported(Symbol::GenVertexArraysOES)))
        });
        assert!(matches!(res, Err(Error::Gles(gles::Error::Unsupported(Symbol::GenVertexArraysOES)))));
        assert!(array.writes.borrow().is_empty());
        assert_eq!(*array.data.borrow(), vec![9, 9]);
    }

    #[test]
    fn write_prefix_of_zero_touches_nothing() {
        let array = FakeArray::new(&[4]);
        write_prefix(&array, 0, |out| { assert!(out.is_empty()); Ok(()) }).unwrap();
        assert!(array.writes.borrow().is_empty());
    }
}
