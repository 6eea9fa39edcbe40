//! Unit tests for children iteration and lineage traversal.

use virus_genealogy::graph::algorithms;
use virus_genealogy::{Direction, SimpleVirus, Virus, VirusGenealogy};

type Genealogy = VirusGenealogy<SimpleVirus<u32>>;

fn ids<'a>(iter: impl Iterator<Item = &'a SimpleVirus<u32>>) -> Vec<u32> {
    iter.map(|virus| *virus.id()).collect()
}

#[test]
fn test_children_in_identifier_order() {
    let mut genealogy = Genealogy::new(0);
    for id in [40, 10, 30, 20] {
        genealogy.create(id, &0).unwrap();
    }

    assert_eq!(ids(genealogy.children(&0).unwrap()), vec![10, 20, 30, 40]);
    assert_eq!(
        ids(genealogy.children(&0).unwrap().rev()),
        vec![40, 30, 20, 10]
    );
    assert_eq!(genealogy.children(&0).unwrap().len(), 4);
}

#[test]
fn test_children_of_leaf_is_empty() {
    let mut genealogy = Genealogy::new(0);
    genealogy.create(1, &0).unwrap();

    let mut children = genealogy.children(&1).unwrap();
    assert_eq!(children.len(), 0);
    assert!(children.next().is_none());
    assert!(children.next_back().is_none());
}

#[test]
fn test_children_restartable() {
    let mut genealogy = Genealogy::new(0);
    genealogy.create(2, &0).unwrap();
    genealogy.create(1, &0).unwrap();

    let first = ids(genealogy.children(&0).unwrap());
    let second = ids(genealogy.children(&0).unwrap());
    assert_eq!(first, second);
}

#[test]
fn test_children_reflect_connect_and_remove() {
    let mut genealogy = Genealogy::new(0);
    genealogy.create(1, &0).unwrap();
    genealogy.create(2, &0).unwrap();
    genealogy.create(3, &2).unwrap();

    genealogy.connect(&3, &1).unwrap();
    assert_eq!(ids(genealogy.children(&1).unwrap()), vec![3]);

    genealogy.remove(&2).unwrap();
    assert_eq!(ids(genealogy.children(&0).unwrap()), vec![1]);
    assert_eq!(ids(genealogy.children(&1).unwrap()), vec![3]);
}

#[test]
fn test_parents_sorted_regardless_of_insertion_order() {
    let mut genealogy = Genealogy::new(0);
    for id in [7, 3, 5] {
        genealogy.create(id, &0).unwrap();
    }
    genealogy.create(9, &7).unwrap();
    genealogy.connect(&9, &5).unwrap();
    genealogy.connect(&9, &3).unwrap();

    assert_eq!(genealogy.get_parents(&9).unwrap(), vec![3, 5, 7]);
}

#[test]
fn test_ancestors_and_descendants() {
    // 0 -> 1 -> 3, 0 -> 2 -> 3 -> 4
    let mut genealogy = Genealogy::new(0);
    genealogy.create(1, &0).unwrap();
    genealogy.create(2, &0).unwrap();
    genealogy.create_with_parents(3, &[1, 2]).unwrap();
    genealogy.create(4, &3).unwrap();

    assert_eq!(genealogy.descendants(&1, None).unwrap(), vec![3, 4]);
    assert_eq!(genealogy.descendants(&0, Some(2)).unwrap(), vec![1, 2, 3]);
    assert_eq!(genealogy.ancestors(&3, None).unwrap(), vec![1, 2, 0]);
    assert_eq!(genealogy.ancestors(&3, Some(1)).unwrap(), vec![1, 2]);
    assert!(genealogy.ancestors(&0, None).unwrap().is_empty());

    assert_eq!(
        algorithms::bfs(&genealogy, &2, Direction::Children, None).unwrap(),
        genealogy.descendants(&2, None).unwrap()
    );
}

#[test]
fn test_traversal_from_missing_virus() {
    let genealogy = Genealogy::new(0);
    assert!(genealogy.descendants(&1, None).is_err());
    assert!(genealogy.ancestors(&1, None).is_err());
}
