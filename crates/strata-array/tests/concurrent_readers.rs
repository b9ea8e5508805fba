//! Integration test: many threads reading one source array at once.
//!
//! Each thread owns its destination; the shared source is only borrowed.
//! Every destination must end up identical to the source and the device's
//! pools and counters must stay consistent.

use std::thread;

use strata_array::{create, create_from, deep_copy, Array};
use strata_memory::{Device, Direction, HostMirror};
use strata_test_utils::{device, ramp_f32};

const READERS: usize = 8;
const COUNT: usize = 4096;

#[test]
fn concurrent_downloads_from_shared_source() {
    let mem = device();
    let mut staging: Array<f32, HostMirror> = create(&mem, "staging", COUNT).unwrap();
    staging.as_mut_slice().copy_from_slice(&ramp_f32(COUNT));
    let mut src: Array<f32, Device> = create_from(&staging).unwrap();
    deep_copy(&mut src, &staging).unwrap();

    let results: Vec<Vec<f32>> = thread::scope(|s| {
        let handles: Vec<_> = (0..READERS)
            .map(|_| {
                let src = &src;
                s.spawn(move || {
                    let mut dst: Array<f32, HostMirror> = create_from(src).unwrap();
                    deep_copy(&mut dst, src).unwrap();
                    dst.as_slice().to_vec()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for out in &results {
        assert_eq!(out.as_slice(), staging.as_slice());
    }
    let stats = mem.transfer_stats();
    assert_eq!(stats.calls(Direction::DeviceToHost), READERS as u64);
    assert_eq!(
        stats.bytes(Direction::DeviceToHost),
        (READERS * COUNT * 4) as u64
    );
    // Only staging remains on the host side; every reader's mirror was dropped.
    assert_eq!(mem.host_bytes_in_use(), COUNT * 4);
}

#[test]
fn concurrent_device_peers_from_shared_source() {
    let mem = device();
    let src: Array<f32, Device> = create(&mem, "src", COUNT).unwrap();

    thread::scope(|s| {
        for _ in 0..READERS {
            let src = &src;
            s.spawn(move || {
                let mut peer: Array<f32, Device> = create_from(src).unwrap();
                deep_copy(&mut peer, src).unwrap();
                assert_eq!(peer.size_bytes(), src.size_bytes());
            });
        }
    });

    assert_eq!(
        mem.transfer_stats().calls(Direction::DeviceToDevice),
        READERS as u64
    );
    assert_eq!(mem.device_bytes_in_use(), COUNT * 4);
}
