//! Property tests: byte order of encoded keys matches key order.

use atomone_collections::{KeyCodec, Map, Order, Pair, SchemaBuilder, Triple};
use atomone_nullables::NullStore;
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_u64_order_preserved(a: u64, b: u64) {
        let (ea, eb) = (a.to_key_bytes().unwrap(), b.to_key_bytes().unwrap());
        prop_assert_eq!(a.cmp(&b), ea.cmp(&eb));
    }

    #[test]
    fn test_pair_roundtrip(k1 in proptest::collection::vec(any::<u8>(), 0..64), k2: u64) {
        let key = Pair::new(k1, k2);
        let bytes = key.to_key_bytes().unwrap();
        prop_assert_eq!(Pair::<Vec<u8>, u64>::decode(&bytes).unwrap(), key);
    }

    #[test]
    fn test_triple_roundtrip(
        k1 in proptest::collection::vec(any::<u8>(), 0..64),
        k2: u64,
        k3 in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        let key = Triple::new(k1, k2, k3);
        let bytes = key.to_key_bytes().unwrap();
        prop_assert_eq!(Triple::<Vec<u8>, u64, Vec<u8>>::decode(&bytes).unwrap(), key);
    }

    #[test]
    fn test_map_iterates_u64_keys_sorted(
        keys in proptest::collection::btree_set(any::<u64>(), 0..50),
    ) {
        let mut sb = SchemaBuilder::new();
        let map: Map<u64, u64> = Map::new(&mut sb, 7u8, "map");
        let mut store = NullStore::new();
        for k in keys.iter().rev() {
            map.set(&mut store, k, k).unwrap();
        }
        let got: Vec<u64> = map
            .iter(&store, Order::Ascending)
            .unwrap()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        let want: Vec<u64> = keys.into_iter().collect();
        prop_assert_eq!(got, want);
    }

    #[test]
    fn test_pair_ids_sorted_within_prefix(
        owner in proptest::collection::vec(any::<u8>(), 1..33),
        ids in proptest::collection::btree_set(any::<u64>(), 1..30),
    ) {
        let mut sb = SchemaBuilder::new();
        let map: Map<Pair<Vec<u8>, u64>, ()> = Map::new(&mut sb, 3u8, "pairs");
        let mut store = NullStore::new();
        for id in &ids {
            map.set(&mut store, &Pair::new(owner.clone(), *id), &()).unwrap();
        }
        let got: Vec<u64> = map
            .iter_prefix(&store, &owner, Order::Ascending)
            .unwrap()
            .into_iter()
            .map(|(k, _)| k.k2)
            .collect();
        let want: Vec<u64> = ids.into_iter().collect();
        prop_assert_eq!(got, want);
    }
}
