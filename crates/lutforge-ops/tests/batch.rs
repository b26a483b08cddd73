//! Batch concatenation end-to-end tests.

use approx::assert_abs_diff_eq;
use lutforge_lut::{Lut3D, cube};
use lutforge_ops::{OpsError, process};
use std::fs;
use std::path::Path;

/// Writes a non-identity grade (per-channel gamma) of the given size.
fn write_grade(path: &Path, size: usize, gamma: f32) {
    let mut lut = Lut3D::identity(size);
    for rgb in &mut lut.data {
        for v in rgb.iter_mut() {
            *v = v.powf(gamma);
        }
    }
    cube::write_3d(path, &lut).unwrap();
}

fn write_identity(path: &Path, size: usize) {
    cube::write_3d(path, &Lut3D::identity(size)).unwrap();
}

#[test]
fn file_plus_file_keeps_first_resolution() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a33.cube");
    let b = dir.path().join("b17.cube");
    let out = dir.path().join("combined.cube");

    write_grade(&a, 33, 2.2);
    write_grade(&b, 17, 0.4545);

    let records = process(&a, &b, &out, 1).unwrap();
    assert_eq!(records.len(), 1);
    assert!(records[0].is_ok());

    let combined = cube::read_3d(&out).unwrap();
    assert_eq!(combined.size, 33, "result must keep the first input's resolution");

    // gamma 2.2 then 1/2.2 is close to a pass-through
    let mid = combined.apply([0.5, 0.5, 0.5]);
    assert_abs_diff_eq!(mid[0], 0.5, epsilon = 0.02);
}

#[test]
fn file_plus_file_into_directory_derives_filename() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("grade.cube");
    let b = dir.path().join("look.cube");
    let out_dir = dir.path().join("out");

    write_identity(&a, 5);
    write_identity(&b, 5);

    let records = process(&a, &b, &out_dir, 1).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "grade_PLUS_look");
    assert!(out_dir.join("grade_PLUS_look.cube").is_file());
}

#[test]
fn directory_batch_isolates_corrupt_file() {
    let dir = tempfile::tempdir().unwrap();
    let luts = dir.path().join("luts");
    let out = dir.path().join("out");
    fs::create_dir(&luts).unwrap();

    // 5 inputs, one of them corrupted text.
    for (i, name) in ["a", "b", "c", "d", "e"].iter().enumerate() {
        let path = luts.join(format!("{}.cube", name));
        if i == 2 {
            fs::write(&path, "LUT_3D_SIZE 5\nnot a number at all\n").unwrap();
        } else {
            write_grade(&path, 5, 1.0 + i as f32 * 0.2);
        }
    }

    let fixed = dir.path().join("fixed.cube");
    write_identity(&fixed, 5);

    let records = process(&luts, &fixed, &out, 4).unwrap();
    assert_eq!(records.len(), 5, "every item must be reported");

    let ok = records.iter().filter(|r| r.is_ok()).count();
    let failed: Vec<_> = records.iter().filter(|r| !r.is_ok()).collect();
    assert_eq!(ok, 4);
    assert_eq!(failed.len(), 1);
    assert!(failed[0].name.starts_with("c_PLUS_"));
    assert!(!failed[0].message.is_empty());

    // The four good outputs were written despite the corrupt sibling.
    for name in ["a", "b", "d", "e"] {
        assert!(
            out.join(format!("{}_PLUS_fixed.cube", name)).is_file(),
            "{} output missing",
            name
        );
    }
}

#[test]
fn directory_on_second_side_preserves_apply_order() {
    let dir = tempfile::tempdir().unwrap();
    let luts = dir.path().join("looks");
    let out = dir.path().join("out");
    fs::create_dir(&luts).unwrap();

    write_grade(&luts.join("warm.cube"), 5, 2.0);
    let fixed = dir.path().join("camera.cube");
    write_grade(&fixed, 9, 1.0);

    let records = process(&fixed, &luts, &out, 1).unwrap();
    assert_eq!(records.len(), 1);
    // Fixed file is first in apply order, so it leads the derived name
    // and sets the output resolution.
    assert_eq!(records[0].name, "camera_PLUS_warm");
    let combined = cube::read_3d(out.join("camera_PLUS_warm.cube")).unwrap();
    assert_eq!(combined.size, 9);
}

#[test]
fn two_directories_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a");
    let b = dir.path().join("b");
    fs::create_dir(&a).unwrap();
    fs::create_dir(&b).unwrap();

    let err = process(&a, &b, dir.path(), 1).unwrap_err();
    assert!(matches!(err, OpsError::InvalidInputCombination));
}

#[test]
fn directory_batch_rejects_file_output() {
    let dir = tempfile::tempdir().unwrap();
    let luts = dir.path().join("luts");
    fs::create_dir(&luts).unwrap();
    write_identity(&luts.join("a.cube"), 5);

    let fixed = dir.path().join("fixed.cube");
    write_identity(&fixed, 5);

    let err = process(&luts, &fixed, &dir.path().join("single.cube"), 1).unwrap_err();
    assert!(matches!(err, OpsError::InvalidOutputTarget(_)));
}

#[test]
fn one_dimensional_input_is_promoted() {
    let dir = tempfile::tempdir().unwrap();
    let curve = dir.path().join("curve.cube");
    let mut text = String::from("LUT_1D_SIZE 16\n");
    for i in 0..16 {
        let t = i as f32 / 15.0;
        let v = t * t;
        text.push_str(&format!("{:.6} {:.6} {:.6}\n", v, v, v));
    }
    fs::write(&curve, text).unwrap();

    let other = dir.path().join("identity.cube");
    write_identity(&other, 17);
    let out = dir.path().join("out.cube");

    let records = process(&curve, &other, &out, 1).unwrap();
    assert!(records[0].is_ok(), "{}", records[0].message);

    let combined = cube::read_3d(&out).unwrap();
    // Promotion uses the default cube resolution, which also becomes the
    // result resolution since the 1D input is the first operand.
    assert_eq!(combined.size, lutforge_lut::DEFAULT_GRID_SIZE);
    let mid = combined.apply([0.5, 0.5, 0.5]);
    assert!((mid[0] - 0.25).abs() < 0.01, "mid = {:?}", mid);
}

#[test]
fn missing_input_becomes_error_record() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("absent.cube");
    let b = dir.path().join("b.cube");
    write_identity(&b, 5);

    let records = process(&a, &b, &dir.path().join("out.cube"), 1).unwrap();
    assert_eq!(records.len(), 1);
    assert!(!records[0].is_ok());
    assert!(records[0].output_path.is_none());
}
