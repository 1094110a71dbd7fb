use super::*;

#[test]
fn test_min_max_index_empty() {
    let empty: [i32; 0] = [];
    assert_eq!(empty.min_index(), None);
    assert_eq!(empty.max_index(), None);
}

#[test]
fn test_min_max_index_first_extreme_wins() {
    let v = [4, 2, 8, 2, 8, 5];
    assert_eq!(v.min_index(), Some(1));
    assert_eq!(v.max_index(), Some(2));

    let same = [7, 7, 7];
    assert_eq!(same.min_index(), Some(0));
    assert_eq!(same.max_index(), Some(0));
}

#[test]
fn test_min_max_index_floats() {
    let v = [0.5, -1.5, 3.25, -1.5];
    assert_eq!(v.min_index(), Some(1));
    assert_eq!(v.max_index(), Some(2));

    let with_nan = [1.0, f64::NAN, 0.0, 2.0];
    assert_eq!(with_nan.min_index(), Some(2));
    assert_eq!(with_nan.max_index(), Some(3));
}

#[test]
fn test_min_max_index_strings() {
    let names = ["mango", "apple", "zucchini", "kiwi"];
    assert_eq!(names.min_index(), Some(1));
    assert_eq!(names.max_index(), Some(2));
}

#[test]
fn test_remove_indices() {
    let mut v: Vec<i32> = (0..10).collect();
    v.remove_indices(&[9, 0, 4, 4, 2]);
    assert_eq!(v, [1, 3, 5, 6, 7, 8]);
}

#[test]
fn test_remove_indices_out_of_range_and_empty() {
    let mut v = vec!["a", "b"];
    v.remove_indices(&[]);
    assert_eq!(v, ["a", "b"]);
    v.remove_indices(&[2, 100]);
    assert_eq!(v, ["a", "b"]);
    v.remove_indices(&[1, 0]);
    assert!(v.is_empty());

    let mut empty: Vec<u8> = Vec::new();
    empty.remove_indices(&[0]);
    assert!(empty.is_empty());
}
