//! End-to-end interaction flows through the `Rating` widget.

use rateline_core::{
    Event, IdSource, Key, MouseButton, Point, Rect, RecordingCanvas, SequentialIds, TouchId,
    Widget,
};
use rateline_widgets::{Phase, Rating, RatingChanged};
use std::any::Any;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

fn commits(msg: Option<Box<dyn Any + Send>>) -> Option<f32> {
    msg.and_then(|m| m.downcast::<RatingChanged>().ok())
        .map(|m| m.value)
}

fn row() -> Rect {
    Rect::new(20.0, 40.0, 120.0, 24.0)
}

fn x_at(fraction: f32) -> Point {
    Point::new(row().x + row().width * fraction, 52.0)
}

/// Host that feeds commits back as the controlled value.
fn drive(rating: &mut Rating, events: &[Event]) -> Vec<f32> {
    let mut out = Vec::new();
    for event in events {
        if let Some(value) = commits(rating.event(event)) {
            rating.set_value(value);
            out.push(value);
        }
    }
    out
}

#[test]
fn touch_drag_commits_once_with_last_preview() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let mut rating = Rating::new().on_rating_change(move |v| sink.lock().unwrap().push(v));
    rating.layout(row());

    let id = TouchId(3);
    let start = Event::TouchStart {
        id,
        position: x_at(0.55),
    };
    let drag = Event::TouchMove {
        id,
        position: x_at(0.65),
    };
    let end = Event::TouchEnd {
        id,
        position: x_at(0.65),
    };

    assert!(rating.event(&start).is_none());
    assert_eq!(rating.preview(), Some(3.0));
    assert_eq!(rating.phase(), Phase::Dragging);

    // Emulated mouse traffic during the drag changes nothing
    assert!(rating
        .event(&Event::MouseMove {
            position: x_at(0.05)
        })
        .is_none());
    assert!(rating.event(&Event::MouseLeave).is_none());

    assert!(rating.event(&drag).is_none());
    assert_eq!(rating.preview(), Some(3.5));

    assert_eq!(commits(rating.event(&end)), Some(3.5));
    assert_eq!(*seen.lock().unwrap(), vec![3.5]);
    assert_eq!(rating.phase(), Phase::Idle);
    assert_eq!(rating.preview(), None);
}

#[test]
fn keyboard_walk_through_the_range() {
    let mut rating = Rating::new().value(2.0);
    rating.layout(row());

    let keys = [
        Key::Right,
        Key::Right,
        Key::PageUp,
        Key::PageUp,
        Key::Right,
        Key::Home,
        Key::Left,
        Key::End,
        Key::Enter,
        Key::PageDown,
    ];
    let events: Vec<Event> = keys.iter().map(|&key| Event::KeyDown { key }).collect();
    let committed = drive(&mut rating, &events);
    assert_eq!(committed, vec![2.5, 3.0, 4.0, 5.0, 0.0, 5.0, 4.0]);
    assert_eq!(rating.get_value(), 4.0);
}

#[test]
fn hover_click_then_leave() {
    let mut rating = Rating::new().value(1.0).tooltips([
        "Poor",
        "Fair",
        "Good",
        "Great",
        "Excellent",
    ]);
    rating.layout(row());

    rating.event(&Event::MouseMove {
        position: x_at(0.46),
    });
    let mut canvas = RecordingCanvas::new();
    rating.paint(&mut canvas);
    assert_eq!(canvas.title(), Some("2.5 - Good"));

    let committed = drive(
        &mut rating,
        &[
            Event::MouseDown {
                position: x_at(0.46),
                button: MouseButton::Left,
            },
            Event::MouseUp {
                position: x_at(0.46),
                button: MouseButton::Left,
            },
            Event::MouseLeave,
        ],
    );
    assert_eq!(committed, vec![2.5]);
    assert_eq!(rating.effective_value(), 2.5);
    assert_eq!(rating.accessible_node().value_text.as_deref(), Some("2.5 - Good"));
}

#[test]
fn read_only_never_commits() {
    let mut rating = Rating::new().value(3.0).read_only(true);
    rating.layout(row());

    let events = [
        Event::MouseMove {
            position: x_at(0.9),
        },
        Event::MouseDown {
            position: x_at(0.9),
            button: MouseButton::Left,
        },
        Event::MouseUp {
            position: x_at(0.9),
            button: MouseButton::Left,
        },
        Event::TouchStart {
            id: TouchId(1),
            position: x_at(0.2),
        },
        Event::TouchEnd {
            id: TouchId(1),
            position: x_at(0.2),
        },
        Event::KeyDown { key: Key::Home },
    ];
    assert!(drive(&mut rating, &events).is_empty());
    assert_eq!(rating.phase(), Phase::Idle);
    assert_eq!(rating.get_value(), 3.0);
}

#[test]
fn instances_never_share_resource_ids() {
    let ids = SequentialIds::new();
    let a = Rating::with_id_source(&ids);
    let b = Rating::with_id_source(&ids);
    assert_ne!(a.id(), b.id());

    let mut seen = HashSet::new();
    for rating in [&a, &b] {
        let mut canvas = RecordingCanvas::new();
        rating.paint(&mut canvas);
        for fill in canvas.split_fills() {
            assert!(seen.insert(fill.gradient_id.clone()));
            assert!(seen.insert(fill.mask_id.clone()));
        }
    }
    assert_eq!(seen.len(), 20);
    assert!(ids.next_id().0 > b.id().0);
}

#[test]
fn global_ids_are_unique_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| (0..25).map(|_| Rating::new().id()).collect::<Vec<_>>()))
        .collect();
    let mut all = HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(all.insert(id));
        }
    }
    assert_eq!(all.len(), 100);
}
