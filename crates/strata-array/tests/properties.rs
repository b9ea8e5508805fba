//! Property tests for array creation and deep copy.

use proptest::prelude::*;
use strata_array::{create, create_from, deep_copy, Array, ArrayError};
use strata_core::Padded;
use strata_memory::{Device, HostMirror};
use strata_test_utils::device;

fn read_back<L: strata_core::Layout>(dev: &Array<u32, Device<L>>) -> Vec<u32> {
    let mut host: Array<u32, HostMirror<L>> = create_from(dev).unwrap();
    deep_copy(&mut host, dev).unwrap();
    host.as_slice().to_vec()
}

proptest! {
    #[test]
    fn created_arrays_are_zero_for_any_count_and_label(
        count in 0usize..4096,
        label in ".{0,24}",
    ) {
        let mem = device();
        let host: Array<u32, HostMirror> = create(&mem, &label, count).unwrap();
        prop_assert_eq!(host.dimension(0), count);
        prop_assert!(host.as_bytes().iter().all(|&b| b == 0));

        let dev: Array<u32, Device> = create(&mem, &label, count).unwrap();
        prop_assert_eq!(dev.dimension(0), count);
        prop_assert!(read_back(&dev).iter().all(|&v| v == 0));
    }

    #[test]
    fn allocation_size_ignores_label(
        count in 0usize..4096,
        a in ".{0,16}",
        b in ".{0,16}",
    ) {
        let mem = device();
        let x: Array<u32, Device<Padded<256>>> = create(&mem, &a, count).unwrap();
        let y: Array<u32, Device<Padded<256>>> = create(&mem, &b, count).unwrap();
        prop_assert_eq!(x.allocation_size(), y.allocation_size());
        prop_assert!(x.allocation_size() >= count);
    }

    #[test]
    fn round_trip_through_mirror_is_exact(
        values in proptest::collection::vec(any::<u32>(), 0..1024),
    ) {
        let mem = device();
        let mut staging: Array<u32, HostMirror> = create(&mem, "staging", values.len()).unwrap();
        staging.as_mut_slice().copy_from_slice(&values);
        let mut a: Array<u32, Device> = create_from(&staging).unwrap();
        deep_copy(&mut a, &staging).unwrap();

        let mut mirror: Array<u32, HostMirror> = create_from(&a).unwrap();
        deep_copy(&mut mirror, &a).unwrap();
        let mut a2: Array<u32, Device> = create(&mem, "a2", values.len()).unwrap();
        deep_copy(&mut a2, &mirror).unwrap();

        prop_assert_eq!(read_back(&a2), values);
    }

    #[test]
    fn deep_copy_twice_equals_once(
        values in proptest::collection::vec(any::<u32>(), 1..512),
    ) {
        let mem = device();
        let mut src: Array<u32, HostMirror> = create(&mem, "src", values.len()).unwrap();
        src.as_mut_slice().copy_from_slice(&values);
        let mut dst: Array<u32, Device> = create_from(&src).unwrap();

        deep_copy(&mut dst, &src).unwrap();
        let once = read_back(&dst);
        deep_copy(&mut dst, &src).unwrap();
        prop_assert_eq!(read_back(&dst), once);
    }

    #[test]
    fn mismatched_copy_never_mutates_destination(
        dst_len in 0usize..512,
        src_len in 0usize..512,
        fill in 1u32..,
    ) {
        prop_assume!(dst_len != src_len);
        let mem = device();
        let src: Array<u32, Device> = create(&mem, "src", src_len).unwrap();
        let mut dst: Array<u32, HostMirror> = create(&mem, "dst", dst_len).unwrap();
        dst.as_mut_slice().fill(fill);

        let is_size_mismatch = matches!(
            deep_copy(&mut dst, &src),
            Err(ArrayError::SizeMismatch { .. })
        );
        prop_assert!(is_size_mismatch);
        prop_assert!(dst.as_slice().iter().all(|&v| v == fill));
        prop_assert_eq!(mem.transfer_stats().total_bytes(), 0);
    }

    #[test]
    fn shape_copy_never_carries_values(
        values in proptest::collection::vec(1u32.., 1..512),
    ) {
        let mem = device();
        let mut host: Array<u32, HostMirror> = create(&mem, "host", values.len()).unwrap();
        host.as_mut_slice().copy_from_slice(&values);

        let dev: Array<u32, Device> = create_from(&host).unwrap();
        prop_assert_eq!(dev.dimension(0), values.len());
        prop_assert!(read_back(&dev).iter().all(|&v| v == 0));
    }
}
