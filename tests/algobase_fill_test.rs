//! fill / fill_n over iterators and slices.

use std::collections::{HashMap, LinkedList};

use tola_algo::algobase::*;

#[test]
fn fill_every_category() {
    let mut v = vec![0; 4];
    fill(&mut v, &3);
    assert_eq!(v, [3; 4]);

    let mut list: LinkedList<String> = (0..3).map(|i| i.to_string()).collect();
    fill(&mut list, &String::from("z"));
    assert!(list.iter().all(|s| s == "z"));

    let mut map: HashMap<u8, u8> = (0..5).map(|k| (k, k)).collect();
    fill(map.values_mut().collect::<Vec<_>>(), &9);
    assert!(map.values().all(|v| *v == 9));
}

#[test]
fn fill_n_returns_the_rest() {
    let mut v = [0u32; 6];
    let mut rest = fill_n(&mut v, 4, &1);
    assert_eq!(rest.len(), 2);
    *rest.next().unwrap() = 5;
    assert_eq!(v, [1, 1, 1, 1, 5, 0]);
}

#[test]
#[should_panic(expected = "fill_n: range ran out after 2 of 3 elements")]
fn fill_n_past_the_end_panics() {
    let mut v = [0; 2];
    let _rest = fill_n(&mut v, 3, &1);
}

#[test]
fn byte_fill_for_boundary_counts() {
    for n in [0usize, 1, 1000] {
        for value in [0u8, 1, 0x7f, 0x80, 0xff] {
            let mut fast = vec![0xAAu8; n + 8];
            let mut slow = fast.clone();
            assert_eq!(fill_n_slice(&mut fast, n, &value), n);
            for slot in &mut slow[..n] {
                *slot = value;
            }
            assert_eq!(fast, slow, "n = {n}, value = {value:#x}");
            assert!(fast[n..].iter().all(|b| *b == 0xAA));
        }
    }
}

#[test]
fn signed_byte_fill_writes_twos_complement() {
    let mut v = [0i8; 16];
    fill_slice(&mut v, &-1);
    assert!(v.iter().all(|b| *b == -1));
    let bytes: Vec<u8> = v.iter().map(|b| *b as u8).collect();
    assert!(bytes.iter().all(|b| *b == 0xff));
}

#[test]
fn element_wise_fill_clones() {
    let mut v = vec![String::new(); 3];
    fill_slice(&mut v, &String::from("ok"));
    assert_eq!(v, ["ok", "ok", "ok"]);

    let mut w = [0.0f64; 5];
    assert_eq!(fill_n_slice(&mut w, 2, &1.5), 2);
    assert_eq!(w, [1.5, 1.5, 0.0, 0.0, 0.0]);
}

#[test]
#[should_panic(expected = "shorter than required length")]
fn fill_n_slice_checks_length() {
    let mut v = [0u8; 3];
    fill_n_slice(&mut v, 4, &1);
}
