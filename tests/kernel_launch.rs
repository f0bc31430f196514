//! Integration tests for kernel launches
//!
//! Tests verify:
//! - dtype and shape validation
//! - every element is written by the launch
//! - reproducibility under a fixed seed
//! - independence between launches and between clients

mod common;

use common::{create_cpu_client, create_seeded_client};
use shadekit::array::{Array, array, vec_array};
use shadekit::dtype::DType;
use shadekit::error::Error;
use shadekit::ops::KernelOps;
use shadekit::runtime::cpu::{CpuClient, CpuDevice, CpuRuntime, LaunchConfig};
use shadekit::runtime::{Device, RuntimeClient};

#[test]
fn test_launch_writes_index() {
    let (client, device) = create_cpu_client();
    let mut x = array::<CpuRuntime>(DType::I64, 10_000, &device).unwrap();

    client.launch(&mut x, |i, _| i as i64 * 2).unwrap();

    let data: Vec<i64> = x.to_vec();
    for (i, v) in data.iter().enumerate() {
        assert_eq!(*v, i as i64 * 2, "element {} not written", i);
    }
}

#[test]
fn test_launch_vec_writes_rows() {
    let (client, device) = create_cpu_client();
    let mut x = vec_array::<CpuRuntime>(3, DType::U32, 257, &device).unwrap();

    client
        .launch_vec(&mut x, |i, _| [i as u32, i as u32 + 1, i as u32 + 2])
        .unwrap();

    let rows = x.to_vec_n::<u32, 3>().unwrap();
    for (i, row) in rows.iter().enumerate() {
        let i = i as u32;
        assert_eq!(*row, [i, i + 1, i + 2]);
    }
}

#[test]
fn test_launch_dtype_mismatch() {
    let (client, device) = create_cpu_client();
    let mut x = array::<CpuRuntime>(DType::F32, 8, &device).unwrap();

    let result = client.launch(&mut x, |_, s| s.rand() as f64);
    assert!(matches!(
        result,
        Err(Error::DTypeMismatch {
            lhs: DType::F32,
            rhs: DType::F64
        })
    ));
}

#[test]
fn test_launch_rejects_vector_array() {
    let (client, device) = create_cpu_client();
    let mut x = vec_array::<CpuRuntime>(2, DType::F32, 8, &device).unwrap();

    let result = client.launch(&mut x, |_, s| s.rand());
    assert!(matches!(result, Err(Error::ShapeMismatch { .. })));
}

#[test]
fn test_launch_vec_width_mismatch() {
    let (client, device) = create_cpu_client();
    let mut x = vec_array::<CpuRuntime>(3, DType::F32, 8, &device).unwrap();

    let result = client.launch_vec(&mut x, |_, s| s.rand_nd::<2>());
    assert!(matches!(result, Err(Error::ShapeMismatch { .. })));

    let mut scalar = array::<CpuRuntime>(DType::F32, 8, &device).unwrap();
    let result = client.launch_vec(&mut scalar, |_, s| s.rand_nd::<1>());
    assert!(matches!(result, Err(Error::ShapeMismatch { .. })));
}

#[test]
fn test_launch_rejects_shared_output() {
    let (client, device) = create_cpu_client();
    let mut x = array::<CpuRuntime>(DType::U32, 4096, &device).unwrap();
    let alias = x.clone();

    let result = client.launch(&mut x, |_, _| {
        alias.to_vec::<u32>().iter().filter(|&&v| v != 0).count() as u32 + 1
    });
    assert!(matches!(result, Err(Error::InvalidArgument { arg: "out", .. })));
    assert!(alias.to_vec::<u32>().iter().all(|&v| v == 0), "rejected launch wrote data");

    let storage = x.storage().clone();
    let mut rows = vec_array::<CpuRuntime>(2, DType::F32, 8, &device).unwrap();
    let row_alias = rows.clone();
    assert!(client.launch(&mut x, |i, _| i as u32).is_err());
    assert!(client.launch_vec(&mut rows, |_, s| s.rand_nd::<2>()).is_err());
    assert_eq!(client.launch_count(), 0);

    drop((alias, storage, row_alias));
    client.launch(&mut x, |i, _| i as u32).unwrap();
    client.launch_vec(&mut rows, |_, s| s.rand_nd::<2>()).unwrap();
    assert_eq!(x.to_vec::<u32>()[4095], 4095);
}

#[test]
fn test_launch_empty_array() {
    let (client, device) = create_cpu_client();
    let mut x = array::<CpuRuntime>(DType::F32, 0, &device).unwrap();

    client.launch(&mut x, |_, s| s.rand()).unwrap();
    assert!(x.to_vec::<f32>().is_empty());
}

#[test]
fn test_same_seed_reproduces() {
    let (client_a, device) = create_seeded_client(99);
    let (client_b, _) = create_seeded_client(99);
    let mut a = array::<CpuRuntime>(DType::F32, 4096, &device).unwrap();
    let mut b = array::<CpuRuntime>(DType::F32, 4096, &device).unwrap();

    client_a.launch(&mut a, |_, s| s.rand()).unwrap();
    client_b.launch(&mut b, |_, s| s.rand()).unwrap();

    assert_eq!(a.to_vec::<f32>(), b.to_vec::<f32>());
}

#[test]
fn test_reproducible_across_thread_counts() {
    let device = CpuDevice::new();
    let one = CpuClient::with_config(
        device.clone(),
        LaunchConfig::default().with_seed(5).with_num_threads(1),
    )
    .unwrap();
    let four = CpuClient::with_config(
        device.clone(),
        LaunchConfig::default()
            .with_seed(5)
            .with_num_threads(4)
            .with_min_len(16),
    )
    .unwrap();

    let mut a = vec_array::<CpuRuntime>(2, DType::F32, 2048, &device).unwrap();
    let mut b = vec_array::<CpuRuntime>(2, DType::F32, 2048, &device).unwrap();
    one.launch_vec(&mut a, |_, s| s.rand_unit_2d()).unwrap();
    four.launch_vec(&mut b, |_, s| s.rand_unit_2d()).unwrap();

    assert_eq!(a.to_vec::<f32>(), b.to_vec::<f32>());
}

#[test]
fn test_successive_launches_differ() {
    let (client, device) = create_seeded_client(7);
    let mut a = array::<CpuRuntime>(DType::F32, 1024, &device).unwrap();
    let mut b = array::<CpuRuntime>(DType::F32, 1024, &device).unwrap();

    client.launch(&mut a, |_, s| s.rand()).unwrap();
    client.launch(&mut b, |_, s| s.rand()).unwrap();

    assert_eq!(client.launch_count(), 2);
    assert_ne!(a.to_vec::<f32>(), b.to_vec::<f32>());
}

#[test]
fn test_cloned_clients_share_launch_counter() {
    let (client, device) = create_seeded_client(8);
    let clone = client.clone();
    let mut a = array::<CpuRuntime>(DType::F32, 64, &device).unwrap();
    let mut b = array::<CpuRuntime>(DType::F32, 64, &device).unwrap();

    client.launch(&mut a, |_, s| s.rand()).unwrap();
    clone.launch(&mut b, |_, s| s.rand()).unwrap();

    assert_eq!(client.launch_count(), 2);
    assert_ne!(a.to_vec::<f32>(), b.to_vec::<f32>());
}

#[test]
fn test_elements_draw_independent_streams() {
    let (client, device) = create_seeded_client(10);
    let mut x = array::<CpuRuntime>(DType::F32, 1024, &device).unwrap();

    client.launch(&mut x, |_, s| s.rand()).unwrap();

    let mut data: Vec<f32> = x.to_vec();
    data.sort_by(f32::total_cmp);
    data.dedup();
    assert!(data.len() > 1000, "only {} distinct values", data.len());
}

#[test]
fn test_launch_overwrites_existing_data() {
    let (client, device) = create_cpu_client();
    let mut x = Array::<CpuRuntime>::from_slice(&[-1.0f32; 16], &[16], &device);

    client.launch(&mut x, |_, s| s.rand()).unwrap();

    assert!(x.to_vec::<f32>().iter().all(|&v| (0.0..1.0).contains(&v)));
}

#[test]
fn test_launch_complete_before_synchronize_returns() {
    let (client, device) = create_cpu_client();
    let mut x = array::<CpuRuntime>(DType::U32, 4096, &device).unwrap();

    client.launch(&mut x, |i, _| i as u32).unwrap();
    client.synchronize();

    assert!(client.device().is_same(&device));
    assert_eq!(x.to_vec::<u32>()[4095], 4095);
}
