#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use roost_watchlist::WatchList;

#[derive(Arbitrary, Debug)]
enum FuzzOp {
    Push(i8),
    Insert(u8, i8),
    Set(u8, i8),
    RemoveAt(u8),
    Remove(i8),
    Clear,
    CopyInto { target_len: u8, offset: u8 },
    Probe(i8),
}

fuzz_target!(|ops: Vec<FuzzOp>| {
    let mut list: WatchList<i8> = WatchList::new();
    let mut model: Vec<i8> = Vec::new();

    for op in ops {
        if model.len() > 512 {
            break;
        }
        match op {
            FuzzOp::Push(v) => {
                list.push(v);
                model.push(v);
            }
            FuzzOp::Insert(i, v) => {
                let i = i as usize;
                let accepted = list.insert(i, v).is_ok();
                assert_eq!(accepted, i <= model.len());
                if accepted {
                    model.insert(i, v);
                }
            }
            FuzzOp::Set(i, v) => {
                let i = i as usize;
                match list.set(i, v) {
                    Ok(old) => {
                        assert_eq!(old, model[i]);
                        model[i] = v;
                    }
                    Err(_) => assert!(i >= model.len()),
                }
            }
            FuzzOp::RemoveAt(i) => {
                let i = i as usize;
                let taken = list.remove_at(i);
                if i < model.len() {
                    assert_eq!(taken, Some(model.remove(i)));
                } else {
                    assert_eq!(taken, None);
                }
            }
            FuzzOp::Remove(v) => {
                let removed = list.remove(&v);
                match model.iter().position(|x| *x == v) {
                    Some(i) => {
                        assert!(removed);
                        model.remove(i);
                    }
                    None => assert!(!removed),
                }
            }
            FuzzOp::Clear => {
                list.clear();
                model.clear();
            }
            FuzzOp::CopyInto { target_len, offset } => {
                let mut target = vec![0i8; target_len as usize % 64];
                let copied = list.copy_into(&mut target, offset as usize % 64);
                assert!(copied <= target.len());
            }
            FuzzOp::Probe(v) => {
                assert_eq!(list.index_of(&v), model.iter().position(|x| *x == v));
            }
        }
        assert_eq!(list.as_slice(), model.as_slice());
    }
});
