//! Integration tests: pointer sessions driven through the Editor.
//!
//! Synthetic pointer events go through a `ListenerRegistry`, the same way a
//! host would route platform events, so listener teardown is observable.

use blockboard_core::{
    Block, BlockId, Board, ComponentCatalog, Editor, EditorConfig, Interaction, ListenerRegistry,
    Modifiers, PointerEventKind, PointerTarget, ResizableAxes, ResizeHandle, SizePolicy,
};
use kurbo::Point;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn catalog() -> ComponentCatalog {
    ComponentCatalog::new()
        .with("button", ResizableAxes::BOTH)
        .with("input", ResizableAxes::WIDTH)
        .with("text", ResizableAxes::NONE)
}

fn editor_with(blocks: Vec<Block>) -> (Editor<ListenerRegistry>, Vec<BlockId>) {
    init_logging();
    let mut board = Board::default();
    let ids = blocks.into_iter().map(|b| board.add_block(b)).collect();
    (Editor::new(board, catalog(), ListenerRegistry::new()), ids)
}

fn position(editor: &Editor<ListenerRegistry>, id: BlockId) -> (f64, f64) {
    let block = editor.board().get(id).unwrap();
    (block.top, block.left)
}

fn none() -> Modifiers {
    Modifiers::default()
}

#[test]
fn zero_delta_drag_leaves_blocks_unchanged() {
    let (mut editor, ids) = editor_with(vec![
        Block::with_geometry("button", 10.0, 10.0, 50.0, 50.0),
        Block::with_geometry("button", 300.0, 300.0, 50.0, 50.0),
    ]);

    let start = Point::new(30.0, 30.0);
    editor
        .pointer_down(PointerTarget::Block(ids[0]), start, none())
        .unwrap();
    editor.pointer_move(Point::new(80.0, 60.0), none());
    editor.pointer_move(start, none());
    editor.pointer_up();

    assert_eq!(position(&editor, ids[0]), (10.0, 10.0));
    assert_eq!(position(&editor, ids[1]), (300.0, 300.0));
}

#[test]
fn multi_selection_moves_as_rigid_body() {
    let (mut editor, ids) = editor_with(vec![
        Block::with_geometry("button", 10.0, 10.0, 20.0, 20.0),
        Block::with_geometry("button", 20.0, 20.0, 20.0, 20.0),
    ]);
    let (a, b) = (ids[0], ids[1]);

    editor
        .pointer_down(PointerTarget::Block(a), Point::ZERO, none())
        .unwrap();
    editor.pointer_up();
    editor
        .pointer_down(PointerTarget::Block(b), Point::ZERO, Modifiers::SHIFT)
        .unwrap();
    editor.pointer_up();

    // Plain press on an already focused block keeps the multi-selection
    editor
        .pointer_down(PointerTarget::Block(a), Point::new(100.0, 100.0), none())
        .unwrap();
    assert_eq!(editor.board().partition().focused_ids(), vec![a, b]);

    editor.pointer_move(Point::new(105.0, 97.0), none());
    editor.pointer_up();

    assert_eq!(position(&editor, a), (7.0, 15.0));
    assert_eq!(position(&editor, b), (17.0, 25.0));
}

#[test]
fn drag_snaps_within_threshold_only() {
    let (mut editor, ids) = editor_with(vec![
        Block::with_geometry("button", 0.0, 400.0, 50.0, 50.0),
        Block::with_geometry("button", 100.0, 0.0, 50.0, 50.0),
    ]);
    let moving = ids[0];

    editor
        .pointer_down(PointerTarget::Block(moving), Point::ZERO, none())
        .unwrap();

    // Unsnapped top 103 -> snapped to the sibling's top
    editor.pointer_move(Point::new(0.0, 103.0), none());
    assert_eq!(position(&editor, moving), (100.0, 400.0));
    assert_eq!(editor.guides().y, Some(100.0));

    // Unsnapped top 94 is 6px away -> no snap, guide cleared
    editor.pointer_move(Point::new(0.0, 94.0), none());
    assert_eq!(position(&editor, moving), (94.0, 400.0));
    assert_eq!(editor.guides().y, None);

    editor.pointer_move(Point::new(0.0, 103.0), none());
    assert!(editor.guides().is_visible());
    editor.pointer_up();
    assert!(!editor.guides().is_visible());
}

#[test]
fn snapping_can_be_disabled() {
    let (mut editor, ids) = editor_with(vec![
        Block::with_geometry("button", 0.0, 400.0, 50.0, 50.0),
        Block::with_geometry("button", 100.0, 0.0, 50.0, 50.0),
    ]);
    editor.set_config(EditorConfig {
        snap_enabled: false,
        ..EditorConfig::default()
    });

    editor
        .pointer_down(PointerTarget::Block(ids[0]), Point::ZERO, none())
        .unwrap();
    editor.pointer_move(Point::new(0.0, 103.0), none());

    assert_eq!(position(&editor, ids[0]), (103.0, 400.0));
    assert!(!editor.guides().is_visible());
}

#[test]
fn axis_lock_keeps_dominant_axis() {
    let (mut editor, ids) = editor_with(vec![Block::with_geometry(
        "button", 0.0, 0.0, 10.0, 10.0,
    )]);
    let id = ids[0];

    editor
        .pointer_down(PointerTarget::Block(id), Point::ZERO, none())
        .unwrap();

    editor.pointer_move(Point::new(20.0, 5.0), Modifiers::SHIFT);
    assert_eq!(position(&editor, id), (0.0, 20.0));

    editor.pointer_move(Point::new(5.0, 20.0), Modifiers::SHIFT);
    assert_eq!(position(&editor, id), (20.0, 0.0));

    // Releasing the modifier mid-drag applies the raw delta again
    editor.pointer_move(Point::new(5.0, 20.0), none());
    assert_eq!(position(&editor, id), (20.0, 5.0));
}

#[test]
fn resize_from_start_handle_keeps_opposite_edges() {
    let (mut editor, ids) = editor_with(vec![Block::with_geometry(
        "button", 50.0, 50.0, 100.0, 100.0,
    )]);
    let id = ids[0];
    let target = PointerTarget::ResizeHandle {
        block: id,
        handle: ResizeHandle::TopLeft,
    };

    editor
        .pointer_down(target, Point::new(50.0, 50.0), none())
        .unwrap();
    assert_eq!(editor.interaction(), Interaction::Resizing);
    editor.pointer_move(Point::new(60.0, 60.0), none());
    editor.pointer_up();

    let block = editor.board().get(id).unwrap();
    assert_eq!((block.width, block.height), (90.0, 90.0));
    assert_eq!((block.top, block.left), (60.0, 60.0));
    assert_eq!(block.top + block.height, 150.0);
    assert_eq!(block.left + block.width, 150.0);
    assert!(block.user_resized);
}

#[test]
fn resize_from_end_handle_grows() {
    let (mut editor, ids) = editor_with(vec![Block::with_geometry(
        "button", 50.0, 50.0, 100.0, 100.0,
    )]);
    let id = ids[0];
    let target = PointerTarget::ResizeHandle {
        block: id,
        handle: ResizeHandle::BottomRight,
    };

    editor
        .pointer_down(target, Point::new(150.0, 150.0), none())
        .unwrap();
    editor.pointer_move(Point::new(160.0, 160.0), none());
    editor.pointer_up();

    let block = editor.board().get(id).unwrap();
    assert_eq!((block.width, block.height), (110.0, 110.0));
    assert_eq!((block.top, block.left), (50.0, 50.0));
}

#[test]
fn resize_size_policies() {
    let (mut editor, ids) = editor_with(vec![Block::with_geometry(
        "input", 0.0, 0.0, 100.0, 30.0,
    )]);
    let id = ids[0];
    let target = PointerTarget::ResizeHandle {
        block: id,
        handle: ResizeHandle::Right,
    };

    editor.pointer_down(target, Point::ZERO, none()).unwrap();
    editor.pointer_move(Point::new(-130.0, 0.0), none());
    editor.pointer_up();
    assert_eq!(editor.board().get(id).unwrap().width, 0.0);

    editor.set_config(EditorConfig {
        size_policy: SizePolicy::AllowNegative,
        ..EditorConfig::default()
    });
    editor.pointer_down(target, Point::ZERO, none()).unwrap();
    editor.pointer_move(Point::new(-20.0, 0.0), none());
    editor.pointer_up();
    assert_eq!(editor.board().get(id).unwrap().width, -20.0);
}

#[test]
fn resize_never_snaps() {
    let (mut editor, ids) = editor_with(vec![
        Block::with_geometry("button", 150.0, 0.0, 100.0, 100.0),
        Block::with_geometry("button", 100.0, 300.0, 50.0, 50.0),
    ]);
    let target = PointerTarget::ResizeHandle {
        block: ids[0],
        handle: ResizeHandle::Top,
    };

    // Top edge lands 3px from the sibling's top and stays there
    editor.pointer_down(target, Point::ZERO, none()).unwrap();
    editor.pointer_move(Point::new(0.0, -47.0), none());

    let block = editor.board().get(ids[0]).unwrap();
    assert_eq!((block.top, block.height), (103.0, 147.0));
    assert!(!editor.guides().is_visible());
}

#[test]
fn pointer_up_releases_every_listener() {
    let (mut editor, ids) = editor_with(vec![
        Block::with_geometry("button", 0.0, 0.0, 50.0, 50.0),
        Block::with_geometry("input", 100.0, 100.0, 80.0, 30.0),
    ]);

    editor
        .pointer_down(PointerTarget::Block(ids[0]), Point::ZERO, none())
        .unwrap();
    assert!(editor.event_source().is_listening(PointerEventKind::Move));
    assert!(editor.event_source().is_listening(PointerEventKind::Up));
    editor.pointer_move(Point::new(10.0, 10.0), none());
    assert!(editor.pointer_up());
    assert_eq!(editor.event_source().active_count(), 0);

    // A stray move after release changes nothing
    let before = editor.board().get(ids[0]).unwrap().clone();
    assert!(!editor.pointer_move(Point::new(300.0, 300.0), none()));
    assert_eq!(editor.board().get(ids[0]).unwrap(), &before);

    // Same for resize sessions; many sessions leak nothing
    let target = PointerTarget::ResizeHandle {
        block: ids[1],
        handle: ResizeHandle::Left,
    };
    for _ in 0..5 {
        editor.pointer_down(target, Point::ZERO, none()).unwrap();
        editor.pointer_move(Point::new(5.0, 0.0), none());
        editor.pointer_up();
    }
    assert_eq!(editor.event_source().active_count(), 0);
    assert_eq!(editor.event_source().total_subscribed(), 12);
    assert_eq!(editor.interaction(), Interaction::Idle);
}

#[test]
fn dropped_block_centres_then_keeps_user_size() {
    let (mut editor, _) = editor_with(vec![]);
    let id = editor.board_mut().add_block(Block::new("button", 200.0, 200.0));
    editor.board_mut().get_mut(id).unwrap().apply_natural_size(80.0, 40.0);
    assert_eq!(position(&editor, id), (180.0, 160.0));

    let target = PointerTarget::ResizeHandle {
        block: id,
        handle: ResizeHandle::BottomRight,
    };
    editor.pointer_down(target, Point::ZERO, none()).unwrap();
    editor.pointer_move(Point::new(20.0, 10.0), none());
    editor.pointer_up();

    // A later measurement no longer overrides the user's size
    editor.board_mut().get_mut(id).unwrap().apply_natural_size(80.0, 40.0);
    let block = editor.board().get(id).unwrap();
    assert_eq!((block.width, block.height), (100.0, 50.0));
}

#[test]
fn config_and_blocks_use_host_field_names() {
    let config: EditorConfig = serde_json::from_str(r#"{ "snap_threshold": 8.0 }"#).unwrap();
    assert!(config.snap_enabled);
    assert_eq!(config.snap_threshold, 8.0);
    assert_eq!(config.size_policy, SizePolicy::ClampZero);

    let block = Block::with_geometry("button", 1.0, 2.0, 3.0, 4.0);
    let json = serde_json::to_value(&block).unwrap();
    assert_eq!(json["componentKey"], "button");
    assert_eq!(json["userResized"], false);
    assert_eq!(json["needsInitialCenter"], false);
}
