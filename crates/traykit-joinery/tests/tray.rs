//! End-to-end checks of the stackable tray layout.

use std::f64::consts::SQRT_2;

use traykit_core::{CLOSE_TOLERANCE, PathCommand};
use traykit_joinery::edges::{Edge, EdgeKind, SlottedEdge};
use traykit_joinery::{divider_centerlines, StackableTray, TrayLayout, TrayParameters};

fn default_tray() -> StackableTray {
    StackableTray::new(TrayParameters::default()).expect("default parameters are valid")
}

fn assert_closed(layout: &TrayLayout) {
    for panel in &layout.panels {
        for contour in panel.contours() {
            assert!(matches!(contour.commands()[0], PathCommand::MoveTo(_)));
            let gap = contour.start().distance(&contour.end());
            assert!(gap <= CLOSE_TOLERANCE, "{} left a gap of {}", panel.label, gap);
        }
    }
}

fn assert_no_overlap(layout: &TrayLayout) {
    let boxes: Vec<_> = layout.panels.iter().map(|p| p.placed_bounds()).collect();
    for (i, a) in boxes.iter().enumerate() {
        for b in &boxes[i + 1..] {
            let overlap_x = a.min.x < b.max.x - 1e-9 && b.min.x < a.max.x - 1e-9;
            let overlap_y = a.min.y < b.max.y - 1e-9 && b.min.y < a.max.y - 1e-9;
            assert!(!(overlap_x && overlap_y), "{:?} overlaps {:?}", a, b);
        }
    }
}

/// Generates the tray and checks that every panel fits the box reserved
/// for it by the edge margins.
fn generate_checked(tray: &StackableTray) -> TrayLayout {
    let layout = tray.generate().expect("tray should generate");
    let plan = tray.panels().unwrap();
    for path in &layout.panels {
        let panel = plan.iter().find(|p| p.label == path.label).unwrap();
        let (width, height) = panel.bounding_size();
        let local = path.local_bounds();
        assert!(local.width() <= width + 1e-9, "{} is wider than reserved", path.label);
        assert!(local.height() <= height + 1e-9, "{} is taller than reserved", path.label);
    }
    assert_closed(&layout);
    assert_no_overlap(&layout);
    layout
}

#[test]
fn test_two_section_tray() {
    let tray = default_tray();
    let dims = tray.dimensions();
    assert_eq!(dims.x, 103.0);
    assert_eq!(dims.bottom_offset, 4.5);
    assert_eq!(dims.yi, 95.5);

    let layout = tray.generate().expect("tray should generate");
    let labels: Vec<&str> = layout.panels.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(
        labels,
        ["bottom", "left", "right", "back", "retainer", "inner vertical 1"]
    );

    let bottom = layout.panel("bottom").unwrap();
    assert_eq!(bottom.width, 103.0);
    assert_eq!(bottom.height, 100.0);

    let divider = layout.panel("inner vertical 1").unwrap();
    assert_eq!(divider.width, 95.5);
    assert_eq!(divider.height, 100.0);

    let retainer = layout.panel("retainer").unwrap();
    assert!((retainer.height - 95.5 * 0.4 * SQRT_2).abs() < 1e-9);
}

#[test]
fn test_every_contour_is_closed() {
    assert_closed(&default_tray().generate().unwrap());
}

#[test]
fn test_divider_holes_line_up_with_slots() {
    let tray = default_tray();
    let dims = tray.dimensions();
    let centers = divider_centerlines(&dims.sections, dims.thickness);
    assert_eq!(centers, vec![51.5]);

    let table = tray.edge_table();
    let slotted = SlottedEdge::new(
        dims.sections.clone(),
        dims.thickness,
        table.get(EdgeKind::FingerMale).unwrap(),
    );
    assert_eq!(slotted.gap_centers(), centers);
    assert_eq!(slotted.fixed_length(), Some(dims.x));

    // Divider holes on the bottom panel straddle the centreline.
    let layout = tray.generate().unwrap();
    let bottom = layout.panel("bottom").unwrap();
    assert!(!bottom.holes.is_empty());
    for hole in &bottom.holes {
        let b = hole.bounds();
        assert!(((b.min.x + b.max.x) / 2.0 - 51.5).abs() < 1e-9);
        assert!((b.width() - dims.thickness).abs() < 1e-9);
    }
}

#[test]
fn test_back_panel_has_floor_rows() {
    let layout = default_tray().generate().unwrap();
    let back = layout.panel("back").unwrap();
    let horizontal = back
        .holes
        .iter()
        .filter(|h| {
            let b = h.bounds();
            ((b.min.y + b.max.y) / 2.0 - 4.5).abs() < 1e-9 && b.width() > b.height()
        })
        .count();
    assert!(horizontal > 0);
}

#[test]
fn test_panels_do_not_overlap() {
    assert_no_overlap(&default_tray().generate().unwrap());
}

#[test]
fn test_generation_is_deterministic() {
    let tray = default_tray();
    let first = tray.generate().unwrap();
    let second = tray.generate().unwrap();
    assert_eq!(first.panels, second.panels);
}

#[test]
fn test_three_sections_with_play() {
    let mut params = TrayParameters {
        sx: vec![40.0, 60.0, 40.0],
        y: 120.0,
        h: 80.0,
        front: 0.3,
        ..Default::default()
    };
    params.finger_joint.play = 0.05;
    let layout = StackableTray::new(params).unwrap().generate().unwrap();
    assert_eq!(layout.dimensions.x, 146.0);
    assert!(layout.panel("inner vertical 1").is_some());
    assert!(layout.panel("inner vertical 2").is_some());
    assert_eq!(layout.panels.len(), 7);
}

#[test]
fn test_inner_height_override() {
    let tray = StackableTray::new(TrayParameters {
        hi: Some(80.0),
        ..Default::default()
    })
    .unwrap();
    let layout = generate_checked(&tray);

    let divider = layout.panel("inner vertical 1").unwrap();
    assert_eq!(divider.width, 75.5);
    assert_eq!(divider.height, 100.0);

    let retainer = layout.panel("retainer").unwrap();
    assert!((retainer.height - 75.5 * 0.4 * SQRT_2).abs() < 1e-9);

    // Side walls keep the full depth; the slope ends 24.5 mm before the back.
    let left = layout.panel("left").unwrap();
    assert_eq!(left.width, 100.0);
    assert_eq!(tray.dimensions().outer_inset(), 24.5);
}

#[test]
fn test_outside_dimensions_generate() {
    let tray = StackableTray::new(TrayParameters {
        sx: vec![60.0, 40.0],
        outside: true,
        ..Default::default()
    })
    .unwrap();
    let layout = generate_checked(&tray);
    assert_eq!(layout.panels.len(), 6);

    let bottom = layout.panel("bottom").unwrap();
    assert!((bottom.width - 94.0).abs() < 1e-9);
    assert_eq!(bottom.height, 97.0);

    // 94 mm inner depth less the 4.5 mm stacking lip offset
    let divider = layout.panel("inner vertical 1").unwrap();
    assert!((divider.width - 89.5).abs() < 1e-9);
    assert_eq!(divider.height, 97.0);

    let retainer = layout.panel("retainer").unwrap();
    assert!((retainer.height - 89.5 * 0.4 * SQRT_2).abs() < 1e-9);
}

#[test]
fn test_flat_front_is_open() {
    let tray = StackableTray::new(TrayParameters {
        front: 0.0,
        ..Default::default()
    })
    .unwrap();
    let layout = generate_checked(&tray);

    let labels: Vec<&str> = layout.panels.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, ["bottom", "left", "right", "back", "inner vertical 1"]);
    // The divider top runs flat at the wall height.
    let divider = layout.panel("inner vertical 1").unwrap();
    assert!(divider.local_bounds().max.y <= 100.0 + 1e-9);
}

#[test]
fn test_steep_fronts_fit_their_cells() {
    for front in [0.1, 0.4, 0.7, 0.9, 1.0] {
        let tray = StackableTray::new(TrayParameters {
            front,
            ..Default::default()
        })
        .unwrap();
        generate_checked(&tray);
    }
}
