#![forbid(unsafe_code)]

//! Pluggable rendering of the item area.
//!
//! The engine draws nothing itself. Hosts implement [`ItemRenderer`] (and,
//! when delete-by-drag is enabled, [`DeleteZoneRenderer`]) for their toolkit;
//! [`ItemArea`] walks the controller's collection in display order and
//! collects the produced elements into an [`AreaFrame`]. After the host has
//! laid the frame out, [`AreaFrame::report_layout`] is the measurement pass
//! that feeds every element's on-screen rectangle back to the controller.
//!
//! ```text
//!   DragController ──items──▶ ItemArea::render ──▶ AreaFrame
//!         ▲                                           │ host layout
//!         └──────────── report_layout ◀───────────────┘
//! ```

use tagflow_core::geometry::Measurement;

use crate::controller::DragController;
use crate::event::DndEvent;
use crate::item::Item;

/// A rendered element that can report where it ended up on screen.
pub trait Measured {
    /// `None` until the host toolkit has laid the element out.
    fn measure(&self) -> Option<Measurement>;
}

impl Measured for () {
    fn measure(&self) -> Option<Measurement> {
        None
    }
}

impl Measured for Measurement {
    fn measure(&self) -> Option<Measurement> {
        Some(*self)
    }
}

impl<M: Measured> Measured for Option<M> {
    fn measure(&self) -> Option<Measurement> {
        self.as_ref().and_then(Measured::measure)
    }
}

/// Tap handle bound to one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PressHandle {
    key: String,
}

impl PressHandle {
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Fire the tap against the controller.
    ///
    /// Returns `None` if the item was removed since the frame was rendered.
    pub fn press<T: Clone>(&self, controller: &DragController<T>) -> Option<DndEvent<T>> {
        controller.press_item(&self.key)
    }
}

/// Input to [`ItemRenderer::render_item`].
#[derive(Debug)]
pub struct ItemProps<'a, T> {
    pub item: &'a Item<T>,
    pub on_press: PressHandle,
}

/// Draws one chip.
pub trait ItemRenderer<T> {
    type Element: Measured;

    fn render_item(&mut self, props: ItemProps<'_, T>) -> Self::Element;
}

/// Draws the delete affordance.
pub trait DeleteZoneRenderer {
    type Element: Measured;

    /// `hovered` is true while a dragged item is over the zone.
    fn render_delete_zone(&mut self, hovered: bool) -> Self::Element;
}

/// One rendered chip and the key it was rendered for.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedItem<E> {
    pub key: String,
    pub element: E,
}

/// Output of one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaFrame<E, Z = ()> {
    /// Rendered chips in display order.
    pub items: Vec<RenderedItem<E>>,
    /// Rendered delete zone, present only when the controller has one.
    pub delete_zone: Option<Z>,
    /// Whether the trailing "add new" affordance should be shown.
    pub show_add_new: bool,
}

impl<E: Measured, Z: Measured> AreaFrame<E, Z> {
    /// Measurement pass: push every laid-out element's rectangle to the
    /// controller.
    ///
    /// Returns the number of measurements delivered. Unmeasured elements are
    /// skipped and keep their previous rectangle.
    pub fn report_layout<T: Clone>(&self, controller: &mut DragController<T>) -> usize {
        let mut delivered = 0;
        for rendered in &self.items {
            if let Some(m) = rendered.element.measure() {
                controller.on_measure_item(&rendered.key, m);
                delivered += 1;
            }
        }
        if let Some(m) = self.delete_zone.as_ref().and_then(Measured::measure) {
            controller.on_measure_delete_zone(m);
            delivered += 1;
        }
        tracing::trace!(target: "tagflow.render", delivered, "layout reported");
        delivered
    }

    /// Keys in the order they were rendered.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|r| r.key.as_str())
    }
}

/// The chip area: renders a controller's collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemArea {
    show_add_new: bool,
}

impl Default for ItemArea {
    fn default() -> Self {
        Self { show_add_new: true }
    }
}

impl ItemArea {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle the trailing "add new" affordance.
    #[must_use]
    pub fn show_add_new(mut self, show: bool) -> Self {
        self.show_add_new = show;
        self
    }

    /// Render every item; no delete zone.
    pub fn render<T, R>(&self, controller: &DragController<T>, renderer: &mut R) -> AreaFrame<R::Element>
    where
        T: Clone,
        R: ItemRenderer<T>,
    {
        AreaFrame {
            items: Self::render_items(controller, renderer),
            delete_zone: None,
            show_add_new: self.show_add_new,
        }
    }

    /// Render every item, plus the delete zone if the controller has one.
    pub fn render_with_delete_zone<T, R, D>(
        &self,
        controller: &DragController<T>,
        renderer: &mut R,
        delete_renderer: &mut D,
    ) -> AreaFrame<R::Element, D::Element>
    where
        T: Clone,
        R: ItemRenderer<T>,
        D: DeleteZoneRenderer,
    {
        let delete_zone = controller
            .has_delete_zone()
            .then(|| delete_renderer.render_delete_zone(controller.is_on_delete_zone()));
        AreaFrame {
            items: Self::render_items(controller, renderer),
            delete_zone,
            show_add_new: self.show_add_new,
        }
    }

    fn render_items<T, R>(controller: &DragController<T>, renderer: &mut R) -> Vec<RenderedItem<R::Element>>
    where
        T: Clone,
        R: ItemRenderer<T>,
    {
        controller
            .items()
            .iter()
            .map(|item| {
                let on_press = PressHandle {
                    key: item.key().to_owned(),
                };
                RenderedItem {
                    key: item.key().to_owned(),
                    element: renderer.render_item(ItemProps { item, on_press }),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagflow_core::geometry::ScreenRect;

    /// Lays chips out left to right, 10 wide with a 10 gap; skips dragged chips.
    struct RowRenderer {
        next_x: f32,
        rendered: Vec<(String, bool)>,
    }

    impl ItemRenderer<&'static str> for RowRenderer {
        type Element = Option<Measurement>;

        fn render_item(&mut self, props: ItemProps<'_, &'static str>) -> Self::Element {
            self.rendered
                .push((props.item.payload.to_owned(), props.item.is_being_dragged()));
            let x = self.next_x;
            self.next_x += 20.0;
            (!props.item.is_being_dragged()).then(|| Measurement::new(x, 0.0, 10.0, 10.0))
        }
    }

    struct Trash {
        hovered: Vec<bool>,
    }

    impl DeleteZoneRenderer for Trash {
        type Element = Measurement;

        fn render_delete_zone(&mut self, hovered: bool) -> Measurement {
            self.hovered.push(hovered);
            Measurement::new(0.0, 100.0, 200.0, 40.0)
        }
    }

    fn controller() -> DragController<&'static str> {
        DragController::new([
            Item::new("a", "#tbt"),
            Item::new("b", "#love"),
            Item::new("c", "#photooftheday"),
        ])
    }

    #[test]
    fn render_then_report_measures_items() {
        let mut c = controller();
        let mut r = RowRenderer {
            next_x: 0.0,
            rendered: Vec::new(),
        };
        let frame = ItemArea::new().render(&c, &mut r);
        assert_eq!(frame.keys().collect::<Vec<_>>(), ["a", "b", "c"]);
        assert_eq!(r.rendered[2], ("#photooftheday".to_owned(), false));
        assert!(frame.show_add_new);
        assert!(frame.delete_zone.is_none());

        assert_eq!(frame.report_layout(&mut c), 3);
        assert_eq!(
            c.item("c").and_then(Item::screen_rect),
            Some(ScreenRect::new(40.0, 0.0, 50.0, 10.0))
        );
        assert_eq!(c.find_item_at(25.0, 5.0, None).map(Item::key), Some("b"));
    }

    #[test]
    fn delete_zone_rendered_only_when_configured() {
        let c = controller();
        let mut r = RowRenderer {
            next_x: 0.0,
            rendered: Vec::new(),
        };
        let mut trash = Trash { hovered: Vec::new() };
        let frame = ItemArea::new().render_with_delete_zone(&c, &mut r, &mut trash);
        assert!(frame.delete_zone.is_none());
        assert!(trash.hovered.is_empty());

        let mut c = c.with_delete_zone();
        let frame = ItemArea::new()
            .show_add_new(false)
            .render_with_delete_zone(&c, &mut r, &mut trash);
        assert_eq!(trash.hovered, [false]);
        assert!(!frame.show_add_new);
        assert_eq!(frame.report_layout(&mut c), 4);
        assert_eq!(c.delete_zone_rect(), Some(ScreenRect::new(0.0, 100.0, 200.0, 140.0)));
    }

    #[test]
    fn unmeasured_elements_keep_previous_rect() {
        let mut c = controller();
        c.on_render_item("a", 500.0, 500.0, 10.0, 10.0);
        let frame = AreaFrame::<(), ()> {
            items: vec![RenderedItem {
                key: "a".to_owned(),
                element: (),
            }],
            delete_zone: None,
            show_add_new: true,
        };
        assert_eq!(frame.report_layout(&mut c), 0);
        assert_eq!(
            c.item("a").and_then(Item::screen_rect),
            Some(ScreenRect::new(500.0, 500.0, 510.0, 510.0))
        );
    }

    #[test]
    fn press_handle_fires_pressed_event() {
        let c = controller();
        let mut handles = Vec::new();
        struct Grab<'h>(&'h mut Vec<PressHandle>);
        impl ItemRenderer<&'static str> for Grab<'_> {
            type Element = ();
            fn render_item(&mut self, props: ItemProps<'_, &'static str>) {
                self.0.push(props.on_press);
            }
        }
        let _ = ItemArea::new().render(&c, &mut Grab(&mut handles));
        let ev = handles[1].press(&c).expect("pressed");
        assert_eq!(ev.item().map(|i| i.payload), Some("#love"));
        assert_eq!(ev.items().map(<[_]>::len), Some(3));
    }
}
