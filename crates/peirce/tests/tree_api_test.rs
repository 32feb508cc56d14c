//! Integration tests for the public graph engine API
//!
//! These tests verify that the public API works end to end, including the
//! persistence adapter.

use peirce::{AegTree, InsertionError, persist};
use peirce_core::geometry::{Ellipse, Point};
use peirce_core::node::{AtomNode, CutNode, Node};

fn point(x: f32, y: f32) -> Point {
    Point::new(x, y).unwrap()
}

fn cut(cx: f32, cy: f32, rx: f32, ry: f32) -> Node {
    Node::Cut(CutNode::new(
        Ellipse::new(point(cx, cy), rx, ry).unwrap(),
        Vec::new(),
    ))
}

fn atom(identifier: char, cx: f32, cy: f32) -> Node {
    Node::Atom(AtomNode::new(identifier, point(cx - 8.0, cy + 8.0), 16.0, 16.0).unwrap())
}

#[test]
fn test_build_and_project_a_graph() {
    let mut tree = AegTree::new();
    tree.insert(cut(-60.0, 0.0, 40.0, 30.0)).unwrap();
    tree.insert(atom('A', -60.0, 0.0)).unwrap();
    tree.insert(cut(60.0, 0.0, 40.0, 30.0)).unwrap();
    tree.insert(atom('B', 60.0, 0.0)).unwrap();

    assert!(tree.verify());
    assert_eq!(tree.formula(), "[(A) (B)]");
}

#[test]
fn test_can_insert_is_a_pure_preview() {
    let mut tree = AegTree::new();
    tree.insert(atom('A', 0.0, 0.0)).unwrap();
    let snapshot = tree.clone();

    let colliding = atom('B', 4.0, 0.0);
    assert!(!tree.can_insert(&colliding));
    assert_eq!(tree, snapshot, "can_insert must not mutate");

    match tree.insert(colliding) {
        Err(peirce::AegError::Insertion(InsertionError::OverlapsSibling)) => {}
        other => panic!("expected an overlap rejection, got {other:?}"),
    }
    assert_eq!(tree, snapshot, "a rejected insert must not mutate");
}

#[test]
fn test_persistence_round_trip() {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("graph.json");

    let mut tree = AegTree::new();
    tree.insert(cut(0.0, 0.0, 80.0, 60.0)).unwrap();
    tree.insert(cut(0.0, 0.0, 40.0, 30.0)).unwrap();
    tree.insert(atom('A', 0.0, 0.0)).unwrap();
    assert_eq!(tree.formula(), "[((A))]");

    persist::save(&tree, &path, true).unwrap();
    let reloaded = persist::load(&path).unwrap();

    assert_eq!(reloaded, tree);
    assert_eq!(reloaded.formula(), "[((A))]");
    assert!(reloaded.verify());
}

#[test]
fn test_loading_a_corrupt_file_fails() {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("corrupt.json");
    std::fs::write(&path, "{ \"sheet\": { \"ellipse\": null } }").unwrap();

    // Missing the children list entirely.
    assert!(persist::load(&path).is_err());
}
