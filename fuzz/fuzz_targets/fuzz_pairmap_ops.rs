#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use roost_pairmap::PairMap;
use std::collections::BTreeMap;

#[derive(Arbitrary, Debug)]
enum FuzzOp {
    Insert(u8, u8, u16),
    Fill { rows: Vec<u8>, cols: Vec<u8> },
    Get(u8, u8),
}

fuzz_target!(|ops: Vec<FuzzOp>| {
    let mut map: PairMap<u8, u8, u16> = PairMap::new();
    let mut shadow: BTreeMap<(u8, u8), u16> = BTreeMap::new();

    for op in ops {
        if shadow.len() > 4096 {
            break;
        }
        match op {
            FuzzOp::Insert(r, c, v) => {
                let accepted = map.insert(r, c, v).is_ok();
                assert_eq!(accepted, !shadow.contains_key(&(r, c)));
                if accepted {
                    shadow.insert((r, c), v);
                }
            }
            FuzzOp::Fill { mut rows, mut cols } => {
                rows.truncate(8);
                cols.truncate(8);
                match map.fill(rows.clone(), cols.clone(), |r, c| {
                    u16::from(*r) ^ u16::from(*c)
                }) {
                    Ok(()) => {
                        for &r in &rows {
                            for &c in &cols {
                                let prev = shadow.insert((r, c), u16::from(r) ^ u16::from(c));
                                assert!(prev.is_none());
                            }
                        }
                    }
                    Err(_) => {
                        // All-or-nothing: every prior entry survives and
                        // nothing new landed.
                        assert_eq!(map.len(), shadow.len());
                        for ((r, c), v) in &shadow {
                            assert_eq!(map.get(r, c), Some(v));
                        }
                    }
                }
            }
            FuzzOp::Get(r, c) => {
                assert_eq!(map.get(&r, &c), shadow.get(&(r, c)));
            }
        }
        assert_eq!(map.len(), shadow.len());
    }
});
