//! The training matrix and query share one mapping per request.

use caddie_encode::{EncodeError, column, encode};
use caddie_shot::{Bend, Lie, Query, Shot, ShotShape};

fn shot(club: &str, distance: u32, lie: Lie, shape: ShotShape) -> Shot {
    Shot::new(club, distance, lie, shape).unwrap()
}

#[test]
fn query_codes_decode_to_query_values() {
    let shots = vec![
        shot("Driver", 260, Lie::TeeBox, ShotShape::Fade),
        shot("7 Iron", 150, Lie::Fairway, ShotShape::Draw),
        shot("9 Iron", 125, Lie::Rough, ShotShape::Straight),
        shot("SW", 60, Lie::Sand, ShotShape::Slice),
    ];
    let query = Query::new(140, Lie::Rough, Bend::DoglegRight)
        .unwrap()
        .with_shot_shape(ShotShape::Fade);
    let ds = encode(&shots, &query).unwrap();
    let m = ds.mappings();

    let q = ds.query();
    assert_eq!(m.lie.value(q[column::LIE] as usize), Some(Lie::Rough));
    assert_eq!(m.bend.value(q[column::BEND] as usize), Some(Bend::DoglegRight));
    assert_eq!(
        m.shot_shape.value(q[column::SHOT_SHAPE] as usize),
        Some(ShotShape::Fade)
    );

    for (i, s) in shots.iter().enumerate() {
        let row = ds.row(i);
        assert_eq!(row[column::DISTANCE], f64::from(s.distance()));
        assert_eq!(m.lie.value(row[column::LIE] as usize), Some(s.lie()));
        assert_eq!(m.bend.value(row[column::BEND] as usize), Some(s.inferred_bend()));
        assert_eq!(
            m.shot_shape.value(row[column::SHOT_SHAPE] as usize),
            Some(s.shot_shape())
        );
    }
}

#[test]
fn mappings_differ_between_histories() {
    let query = Query::new(150, Lie::Fairway, Bend::Straight).unwrap();
    let a: Vec<Shot> = (0..3)
        .map(|i| shot("7 Iron", 150 + i, Lie::Fairway, ShotShape::Straight))
        .collect();
    let b: Vec<Shot> = (0..3)
        .map(|i| shot("7 Iron", 150 + i, Lie::Rough, ShotShape::Hook))
        .collect();

    let da = encode(&a, &query).unwrap();
    let db = encode(&b, &query).unwrap();
    assert_eq!(da.mappings().lie.len(), 1);
    assert_eq!(db.mappings().lie.len(), 2);
    assert_ne!(da.mappings(), db.mappings());
}

#[test]
fn minimum_sample_size() {
    let query = Query::new(150, Lie::Fairway, Bend::Straight).unwrap();
    for n in 0..3u32 {
        let shots: Vec<Shot> = (0..n)
            .map(|i| shot("7 Iron", 150 + i, Lie::Fairway, ShotShape::Straight))
            .collect();
        assert!(matches!(
            encode(&shots, &query),
            Err(EncodeError::InsufficientData { min: 3, .. })
        ));
    }
    let shots: Vec<Shot> = (0..3)
        .map(|i| shot("7 Iron", 150 + i, Lie::Fairway, ShotShape::Straight))
        .collect();
    assert!(encode(&shots, &query).is_ok());
}
