// Point buffer parsing: the raw (x, y, energy) triple contract.

use swirl_core::{demo_points, Point, PointBuffer, PointDataError, MAX_POINTS};

fn bytes_of(floats: &[f32]) -> Vec<u8> {
    bytemuck::cast_slice(floats).to_vec()
}

#[test]
fn parses_triples_without_a_length_header() {
    let bytes = bytes_of(&[0.5, -0.25, 0.8, -1.0, 1.0, 0.0]);
    let buffer = PointBuffer::from_bytes(&bytes).unwrap();
    assert_eq!(buffer.len(), 2);
    assert_eq!(
        buffer.points()[0],
        Point {
            x: 0.5,
            y: -0.25,
            energy: 0.8
        }
    );
    assert_eq!(
        buffer.points()[1],
        Point {
            x: -1.0,
            y: 1.0,
            energy: 0.0
        }
    );
}

#[test]
fn empty_buffer_is_a_valid_empty_dataset() {
    let buffer = PointBuffer::from_bytes(&[]).unwrap();
    assert!(buffer.is_empty());
}

#[test]
fn trailing_bytes_are_rejected() {
    let mut bytes = bytes_of(&[0.1, 0.2, 0.3]);
    bytes.push(0xff);
    assert_eq!(
        PointBuffer::from_bytes(&bytes),
        Err(PointDataError::Malformed(13))
    );

    // A whole number of floats that is not a whole number of triples.
    let bytes = bytes_of(&[0.1, 0.2, 0.3, 0.4]);
    assert!(matches!(
        PointBuffer::from_bytes(&bytes),
        Err(PointDataError::Malformed(_))
    ));
}

#[test]
fn oversized_datasets_are_rejected() {
    let floats = vec![0.0_f32; (MAX_POINTS + 1) * 3];
    let bytes = bytes_of(&floats);
    assert_eq!(
        PointBuffer::from_bytes(&bytes),
        Err(PointDataError::TooManyPoints(MAX_POINTS + 1, MAX_POINTS))
    );

    // Exactly at the limit is fine.
    let floats = vec![0.0_f32; MAX_POINTS * 3];
    assert_eq!(
        PointBuffer::from_bytes(&bytes_of(&floats)).unwrap().len(),
        MAX_POINTS
    );
}

#[test]
fn from_points_applies_the_same_limit() {
    let too_many = vec![
        Point {
            x: 0.0,
            y: 0.0,
            energy: 0.0
        };
        MAX_POINTS + 1
    ];
    assert!(PointBuffer::from_points(too_many).is_err());
}

#[test]
fn demo_points_are_deterministic_and_in_range() {
    let a = demo_points(1_000, 42);
    let b = demo_points(1_000, 42);
    assert_eq!(a.points(), b.points());
    for p in a.points() {
        assert!((-1.0..=1.0).contains(&p.x));
        assert!((-1.0..=1.0).contains(&p.y));
        assert!((0.0..=1.0).contains(&p.energy));
    }

    // A different seed gives a different cloud.
    let c = demo_points(1_000, 7);
    assert_ne!(a.points(), c.points());
}

#[test]
fn demo_points_respect_the_dataset_cap() {
    let buffer = demo_points(usize::MAX, 1);
    assert_eq!(buffer.len(), MAX_POINTS);
}
