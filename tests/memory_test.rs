//! Scratch buffers, raw allocation and in-place construction.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;
use std::mem::MaybeUninit;
use std::panic::{self, AssertUnwindSafe};
use std::ptr::NonNull;
use std::rc::Rc;

use tola_algo::memory::*;

/// Allocator that refuses blocks larger than `limit` bytes and keeps count
/// of what happened.
struct LimitAlloc {
    limit: usize,
    attempts: Cell<usize>,
    first_size: Cell<Option<usize>>,
    outstanding: Cell<usize>,
}

impl LimitAlloc {
    fn new(limit: usize) -> Self {
        LimitAlloc {
            limit,
            attempts: Cell::new(0),
            first_size: Cell::new(None),
            outstanding: Cell::new(0),
        }
    }
}

unsafe impl RawAlloc for LimitAlloc {
    fn allocate(&self, layout: Layout) -> Option<NonNull<u8>> {
        self.attempts.set(self.attempts.get() + 1);
        if self.first_size.get().is_none() {
            self.first_size.set(Some(layout.size()));
        }
        if layout.size() == 0 || layout.size() > self.limit {
            return None;
        }
        let ptr = NonNull::new(unsafe { System.alloc(layout) })?;
        self.outstanding.set(self.outstanding.get() + 1);
        Some(ptr)
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        self.outstanding.set(self.outstanding.get() - 1);
        unsafe { System.dealloc(ptr.as_ptr(), layout) }
    }
}

/// Counts how many values have been dropped.
#[derive(Clone)]
struct DropCounter(Rc<Cell<usize>>);

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

// ============================================================================
// Temporary buffers
// ============================================================================

mod temp_buffer {
    use super::*;

    #[test]
    fn full_request_is_granted() {
        let buf = TempBuffer::new(100, &7u32);
        assert_eq!(buf.requested_len(), 100);
        assert_eq!(buf.len(), 100);
        assert!(buf.iter().all(|&x| x == 7));
    }

    #[test]
    fn refused_requests_are_halved() {
        // Room for 25 u32s but not for 50.
        let alloc = LimitAlloc::new(100);
        {
            let buf = TempBuffer::new_in(100, &1u32, &alloc);
            assert_eq!(buf.requested_len(), 100);
            assert_eq!(buf.len(), 25);
            assert_eq!(alloc.attempts.get(), 3);
            assert_eq!(alloc.outstanding.get(), 1);
        }
        assert_eq!(alloc.outstanding.get(), 0);
    }

    #[test]
    fn refusing_everything_yields_empty_buffer() {
        let alloc = LimitAlloc::new(0);
        let buf = TempBuffer::new_in(100, &1u64, &alloc);
        assert!(buf.is_empty());
        assert_eq!(buf.requested_len(), 100);
        // 100, 50, 25, 12, 6, 3, 1
        assert_eq!(alloc.attempts.get(), 7);
        assert_eq!(alloc.outstanding.get(), 0);
    }

    #[test]
    fn request_is_capped_below_i32_max_bytes() {
        let alloc = LimitAlloc::new(0);
        let _ = TempBuffer::new_in(usize::MAX, &0u32, &alloc);
        let first = alloc.first_size.get().unwrap();
        assert_eq!(first, (i32::MAX as usize / 4) * 4);
    }

    #[test]
    fn zero_sized_elements_never_allocate() {
        let alloc = LimitAlloc::new(0);
        let buf = TempBuffer::new_in(1000, &(), &alloc);
        assert_eq!(buf.len(), 1000);
        assert_eq!(alloc.attempts.get(), 0);
    }

    #[test]
    fn zero_request_is_empty() {
        let buf = TempBuffer::new(0, &String::from("x"));
        assert!(buf.is_empty());
        assert_eq!(buf.requested_len(), 0);
        assert_eq!(&*buf, &[] as &[String]);
    }

    #[test]
    fn failed_construction_drops_what_was_built() {
        let drops = Rc::new(Cell::new(0));
        let alloc = LimitAlloc::new(usize::MAX);
        let buf = TempBuffer::try_with_in(
            10,
            |i| if i < 4 { Ok(DropCounter(drops.clone())) } else { Err("construction failed") },
            &alloc,
        );
        assert!(buf.is_empty());
        assert_eq!(buf.requested_len(), 10);
        assert_eq!(drops.get(), 4);
        assert_eq!(alloc.outstanding.get(), 0);
    }

    #[test]
    fn successful_try_with_passes_indices() {
        let buf = TempBuffer::try_with(5, |i| Ok::<_, ()>(i * i));
        assert_eq!(&*buf, &[0usize, 1, 4, 9, 16]);
    }

    #[test]
    fn panicking_construction_frees_storage() {
        let drops = Rc::new(Cell::new(0));
        let alloc = LimitAlloc::new(usize::MAX);
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            TempBuffer::try_with_in(
                8,
                |i| {
                    if i == 3 {
                        panic!("element constructor panicked");
                    }
                    Ok::<_, ()>(DropCounter(drops.clone()))
                },
                &alloc,
            )
        }));
        assert!(result.is_err());
        assert_eq!(drops.get(), 3);
        assert_eq!(alloc.outstanding.get(), 0);
    }

    #[test]
    fn dropping_the_buffer_destroys_elements() {
        let drops = Rc::new(Cell::new(0));
        let seed = DropCounter(drops.clone());
        let buf = TempBuffer::new(6, &seed);
        assert_eq!(buf.len(), 6);
        assert_eq!(drops.get(), 0);
        drop(buf);
        assert_eq!(drops.get(), 6);
    }

    #[test]
    fn buffer_is_writable_scratch() {
        let mut buf = TempBuffer::new(4, &0i32);
        buf.copy_from_slice(&[4, 3, 2, 1]);
        buf.sort_unstable();
        assert_eq!(&*buf, &[1, 2, 3, 4]);
        assert_eq!(buf.as_ptr(), buf.as_mut_ptr() as *const i32);
    }

    #[test]
    fn for_slice_sizes_from_the_source() {
        let src = [String::from("a"), String::from("b"), String::from("c")];
        let buf = TempBuffer::for_slice(&src);
        assert_eq!(buf.requested_len(), 3);
        assert_eq!(buf.len(), 3);

        let empty: [String; 0] = [];
        assert!(TempBuffer::for_slice(&empty).is_empty());
    }

    #[test]
    fn debug_shows_request_and_elements() {
        let buf = TempBuffer::new(2, &1u8);
        assert_eq!(format!("{buf:?}"), "TempBuffer { requested: 2, elements: [1, 1] }");
    }
}

// ============================================================================
// Raw temporary storage
// ============================================================================

mod raw {
    use super::*;

    #[test]
    fn get_and_release_round_trip() {
        let (ptr, granted) = get_temporary_buffer::<String>(32);
        assert_eq!(granted, 32);
        unsafe {
            for i in 0..granted {
                construct(ptr.as_ptr().add(i), i.to_string());
            }
            assert_eq!(*ptr.as_ptr().add(granted - 1), (granted - 1).to_string());
            destroy_range(ptr.as_ptr(), granted);
            release_temporary_buffer(ptr, granted);
        }
    }

    #[test]
    fn zero_length_get_is_dangling_and_empty() {
        let (ptr, granted) = get_temporary_buffer::<u64>(0);
        assert_eq!(granted, 0);
        unsafe { release_temporary_buffer(ptr, granted) };
    }

    #[test]
    fn global_refuses_zero_size() {
        assert!(Global.allocate(Layout::new::<()>()).is_none());
        let layout = Layout::new::<u64>();
        let block = Global.allocate(layout).unwrap();
        unsafe { Global.deallocate(block, layout) };
    }
}

// ============================================================================
// Construction
// ============================================================================

mod construction {
    use super::*;

    #[test]
    fn construct_then_destroy() {
        let drops = Rc::new(Cell::new(0));
        let mut slot = MaybeUninit::<DropCounter>::uninit();
        unsafe {
            construct(slot.as_mut_ptr(), DropCounter(drops.clone()));
            assert_eq!(drops.get(), 0);
            destroy(slot.as_mut_ptr());
        }
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn construct_default_writes_default() {
        let mut slot = MaybeUninit::<Vec<u8>>::uninit();
        let value = unsafe {
            construct_default(slot.as_mut_ptr());
            slot.assume_init()
        };
        assert!(value.is_empty());
    }

    #[test]
    fn destroy_null_is_a_no_op() {
        unsafe {
            destroy::<String>(std::ptr::null_mut());
            destroy_range::<String>(std::ptr::null_mut(), 5);
        }
    }

    #[test]
    fn destroy_range_drops_each_value() {
        let drops = Rc::new(Cell::new(0));
        let mut slots: [MaybeUninit<DropCounter>; 3] = [const { MaybeUninit::uninit() }; 3];
        unsafe {
            for slot in &mut slots {
                construct(slot.as_mut_ptr(), DropCounter(drops.clone()));
            }
            destroy_range(slots.as_mut_ptr().cast::<DropCounter>(), slots.len());
        }
        assert_eq!(drops.get(), 3);
    }
}
