//! Headless tag picker: lays hashtag chips out in wrapping rows, replays a
//! scripted drag session and prints the collection after every change.
//!
//! Run:
//!   TAGFLOW_LOG=tagflow=debug cargo run -p tagflow --example tag_picker --features tracing-subscriber

use std::time::Duration;

use tagflow::prelude::*;

const TAGS: [&str; 11] = [
    "#love",
    "#instagood",
    "#photooftheday",
    "#beautiful",
    "#fashion",
    "#happy",
    "#tbt",
    "#cute",
    "#followme",
    "#like4like",
    "#friends",
];

const ROW_WIDTH: f32 = 320.0;
const CHIP_HEIGHT: f32 = 24.0;
const GAP: f32 = 8.0;
const GLYPH_WIDTH: f32 = 7.0;

/// Flow layout: chips wrap to the next row when the current one is full.
struct FlowLayout {
    x: f32,
    y: f32,
}

impl FlowLayout {
    fn new() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

impl ItemRenderer<()> for FlowLayout {
    type Element = Measurement;

    fn render_item(&mut self, props: ItemProps<'_, ()>) -> Measurement {
        let width = props.item.key().len() as f32 * GLYPH_WIDTH + 2.0 * GAP;
        if self.x > 0.0 && self.x + width > ROW_WIDTH {
            self.x = 0.0;
            self.y += CHIP_HEIGHT + GAP;
        }
        let m = Measurement::new(self.x, self.y, width, CHIP_HEIGHT);
        self.x += width + GAP;
        m
    }
}

/// "Release here to delete" bar under the chips.
struct DeleteBar;

impl DeleteZoneRenderer for DeleteBar {
    type Element = Measurement;

    fn render_delete_zone(&mut self, hovered: bool) -> Measurement {
        if hovered {
            println!("  [ release here to delete ]  <- hovered");
        }
        Measurement::new(0.0, 200.0, ROW_WIDTH, 40.0)
    }
}

fn relayout(picker: &mut DragController<()>) {
    let frame = ItemArea::new().render_with_delete_zone(picker, &mut FlowLayout::new(), &mut DeleteBar);
    frame.report_layout(picker);
}

fn center(picker: &DragController<()>, key: &str) -> Option<(f32, f32)> {
    let rect = picker.item(key)?.screen_rect()?;
    Some((rect.tl_x + rect.width() / 2.0, rect.tl_y + rect.height() / 2.0))
}

/// Press on `from`, nudge to claim, glide to `to`, release.
fn drag(
    picker: &mut DragController<()>,
    tracker: &mut GestureTracker,
    callbacks: &mut Callbacks<()>,
    clock: &mut Instant,
    from: &str,
    to: (f32, f32),
) {
    let Some((sx, sy)) = center(picker, from) else {
        return;
    };
    tracker.process(&PointerSample::down(sx, sy), picker, *clock);
    tracker.process(&PointerSample::moved(sx + 1.0, sy), picker, *clock);

    for step in 1..=4 {
        *clock += Duration::from_millis(300);
        let t = step as f32 / 4.0;
        let (x, y) = (sx + (to.0 - sx) * t, sy + (to.1 - sy) * t);
        tracker.process(&PointerSample::moved(x, y), picker, *clock);
        if picker.take_layout_transition().is_some() {
            relayout(picker);
        }
    }

    if let Some(event) = tracker.process(&PointerSample::up(to.0, to.1), picker, *clock) {
        callbacks.dispatch(&event);
    }
    relayout(picker);
}

fn main() -> tagflow::Result<()> {
    logging::init()?;

    let config = DndConfig::from_env().validated();
    let mut picker = DragController::with_config(TAGS.map(Item::keyed), config).with_delete_zone();
    relayout(&mut picker);

    let mut callbacks = Callbacks::new()
        .on_press_item(|item: &Item<()>, _items| println!("clicked {}", item.key()))
        .on_change(|items: &[Item<()>], item, action| {
            let keys: Vec<&str> = items.iter().map(Item::key).collect();
            match action {
                Some(action) => println!("{action} {} -> {keys:?}", item.key()),
                None => println!("moved {} -> {keys:?}", item.key()),
            }
        })
        .on_press_add_new(|| println!("add new requested"));

    let mut tracker = GestureTracker::new();
    let mut clock = Instant::now();

    if let Some(target) = center(&picker, "#beautiful") {
        drag(&mut picker, &mut tracker, &mut callbacks, &mut clock, "#love", target);
    }
    drag(&mut picker, &mut tracker, &mut callbacks, &mut clock, "#tbt", (100.0, 220.0));

    if let Some(event) = picker.press_item("#cute") {
        callbacks.dispatch(&event);
    }
    callbacks.dispatch(&picker.press_add_new());

    println!("{} tags left", picker.len());
    Ok(())
}
