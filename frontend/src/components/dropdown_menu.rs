use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{EventTarget, KeyboardEvent};
use yew::prelude::*;

/// Open/closed flag of one menu instance.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MenuState {
    pub open: bool,
}

pub enum MenuAction {
    Toggle,
    Close,
    SetOpen(bool),
}

impl MenuState {
    /// Pure transition function.
    fn apply(self, action: &MenuAction) -> MenuState {
        let open = match action {
            MenuAction::Toggle => !self.open,
            MenuAction::Close => false,
            MenuAction::SetOpen(next) => *next,
        };
        MenuState {
            open,
        }
    }
}

/// An action paired with the observer to notify. The notification carries the
/// reduced value itself, never a render-time snapshot, so it stays exact even
/// if several dispatches land before a re-render.
pub struct MenuCommand {
    action: MenuAction,
    notify: Callback<bool>,
}

impl Reducible for MenuState {
    type Action = MenuCommand;

    fn reduce(self: Rc<Self>, command: Self::Action) -> Rc<Self> {
        let next = self.apply(&command.action);
        command.notify.emit(next.open);
        Rc::new(next)
    }
}

/// Shared handle wiring one trigger and one content panel together.
///
/// The controller is passed explicitly into [`DropdownMenuTrigger`],
/// [`DropdownMenuContent`] and [`DropdownMenuItem`]; there is no ambient
/// context to forget to provide. It also carries the registered bounding
/// regions (trigger and panel nodes) so outside-click detection is a plain
/// containment check instead of markup inspection.
#[derive(Clone, PartialEq)]
pub struct MenuController {
    state: UseReducerHandle<MenuState>,
    trigger_ref: NodeRef,
    content_ref: NodeRef,
    on_open_change: Callback<bool>,
}

impl MenuController {
    pub fn is_open(&self) -> bool {
        self.state.open
    }

    /// Update the flag and notify the external observer with the new value.
    pub fn set_open(&self, next: bool) {
        self.dispatch(MenuAction::SetOpen(next));
    }

    pub fn toggle(&self) {
        self.dispatch(MenuAction::Toggle);
    }

    /// Idempotent close, used by Escape and outside dismissal.
    pub fn close(&self) {
        self.dispatch(MenuAction::Close);
    }

    fn dispatch(&self, action: MenuAction) {
        self.state.dispatch(MenuCommand {
            action,
            notify: self.on_open_change.clone(),
        });
    }

    pub fn trigger_ref(&self) -> NodeRef {
        self.trigger_ref.clone()
    }

    pub fn content_ref(&self) -> NodeRef {
        self.content_ref.clone()
    }

    /// Whether an event target lies inside either registered region.
    pub fn contains(&self, target: Option<EventTarget>) -> bool {
        let Some(node) = target.and_then(|target| target.dyn_into::<web_sys::Node>().ok()) else {
            return false;
        };
        [&self.trigger_ref, &self.content_ref].into_iter().any(|region| {
            region
                .cast::<web_sys::Node>()
                .is_some_and(|owner| owner.contains(Some(&node)))
        })
    }
}

/// Construct a closed menu controller.
#[hook]
pub fn use_dropdown_menu() -> MenuController {
    // Memoized so the controller compares equal across renders; a fresh
    // callback each render would re-key the content effect and churn the
    // document listeners.
    let noop = use_memo((), |_| Callback::noop());
    use_dropdown_menu_with((*noop).clone())
}

/// Construct a menu controller that reports every open-state change.
#[hook]
pub fn use_dropdown_menu_with(on_open_change: Callback<bool>) -> MenuController {
    let state = use_reducer(MenuState::default);
    let trigger_ref = use_node_ref();
    let content_ref = use_node_ref();

    MenuController {
        state,
        trigger_ref,
        content_ref,
        on_open_change,
    }
}

/// Horizontal (or vertical, for side menus) alignment of the panel edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAlign {
    Start,
    Center,
    End,
}

/// Which side of the trigger the panel opens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuSide {
    Top,
    Bottom,
    Left,
    Right,
}

// Static placement only: each (align, side) pair maps to one fixed class set,
// no viewport-aware repositioning.
fn placement_classes(align: MenuAlign, side: MenuSide) -> Classes {
    let side_classes = match side {
        MenuSide::Top => classes!("bottom-full"),
        MenuSide::Bottom => classes!("top-full"),
        MenuSide::Left => classes!("right-full"),
        MenuSide::Right => classes!("left-full"),
    };

    let align_classes = match side {
        MenuSide::Top | MenuSide::Bottom => match align {
            MenuAlign::Start => classes!("left-0"),
            MenuAlign::Center => classes!("left-1/2", "-translate-x-1/2"),
            MenuAlign::End => classes!("right-0"),
        },
        MenuSide::Left | MenuSide::Right => match align {
            MenuAlign::Start => classes!("top-0"),
            MenuAlign::Center => classes!("top-1/2", "-translate-y-1/2"),
            MenuAlign::End => classes!("bottom-0"),
        },
    };

    classes!(side_classes, align_classes)
}

// The offset pushes the panel away from the trigger on the axis of `side`.
fn offset_style(side: MenuSide, side_offset: i32) -> String {
    match side {
        MenuSide::Top => format!("margin-bottom: {side_offset}px;"),
        MenuSide::Bottom => format!("margin-top: {side_offset}px;"),
        MenuSide::Left => format!("margin-right: {side_offset}px;"),
        MenuSide::Right => format!("margin-left: {side_offset}px;"),
    }
}

#[derive(Properties, PartialEq)]
pub struct DropdownMenuProps {
    #[prop_or_default]
    pub children: Children,

    #[prop_or_default]
    pub class: Classes,
}

/// Positioning anchor the content panel attaches to.
#[function_component(DropdownMenu)]
pub fn dropdown_menu(props: &DropdownMenuProps) -> Html {
    html! {
        <div class={classes!("relative", "inline-flex", props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DropdownMenuTriggerProps {
    pub menu: MenuController,

    #[prop_or_default]
    pub children: Children,

    #[prop_or_default]
    pub class: Classes,
}

/// Interactive element that opens and closes the menu.
///
/// The trigger always owns its activation handlers and accessibility
/// attributes; callers customize it through `class` and `children` only.
#[function_component(DropdownMenuTrigger)]
pub fn dropdown_menu_trigger(props: &DropdownMenuTriggerProps) -> Html {
    let menu = props.menu.clone();

    let onclick = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.toggle())
    };

    let onkeydown = {
        let menu = menu.clone();
        Callback::from(move |event: KeyboardEvent| match event.key().as_str() {
            "Enter" | " " => {
                // Handled here so the browser's default button activation
                // cannot fire a second toggle.
                event.prevent_default();
                menu.toggle();
            },
            "Escape" => menu.close(),
            _ => {},
        })
    };

    html! {
        <button
            ref={menu.trigger_ref()}
            type="button"
            class={props.class.clone()}
            {onclick}
            {onkeydown}
            aria-expanded={menu.is_open().to_string()}
            aria-haspopup="menu"
        >
            { for props.children.iter() }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct DropdownMenuContentProps {
    pub menu: MenuController,

    #[prop_or(MenuAlign::Center)]
    pub align: MenuAlign,

    #[prop_or(MenuSide::Bottom)]
    pub side: MenuSide,

    #[prop_or(4)]
    pub side_offset: i32,

    #[prop_or_default]
    pub children: Children,

    #[prop_or_default]
    pub class: Classes,
}

/// Menu panel. Mounted only while open; while mounted it holds the
/// document-level dismissal listeners and releases them on every exit path.
#[function_component(DropdownMenuContent)]
pub fn dropdown_menu_content(props: &DropdownMenuContentProps) -> Html {
    let menu = props.menu.clone();
    let open = menu.is_open();

    {
        let menu = menu.clone();
        use_effect_with((menu, open), move |(menu, open)| {
            let listeners = if *open {
                let document = web_sys::window().and_then(|win| win.document());

                document.map(|document| {
                    let pointer_listener = {
                        let menu = menu.clone();
                        Closure::wrap(Box::new(move |event: web_sys::Event| {
                            if !menu.contains(event.target()) {
                                menu.close();
                            }
                        }) as Box<dyn FnMut(_)>)
                    };
                    let key_listener = {
                        let menu = menu.clone();
                        Closure::wrap(Box::new(move |event: KeyboardEvent| {
                            if event.key() == "Escape" {
                                menu.close();
                            }
                        }) as Box<dyn FnMut(_)>)
                    };

                    let _ = document.add_event_listener_with_callback(
                        "pointerdown",
                        pointer_listener.as_ref().unchecked_ref(),
                    );
                    let _ = document.add_event_listener_with_callback(
                        "keydown",
                        key_listener.as_ref().unchecked_ref(),
                    );

                    (document, pointer_listener, key_listener)
                })
            } else {
                None
            };

            move || {
                if let Some((document, pointer_listener, key_listener)) = listeners {
                    let _ = document.remove_event_listener_with_callback(
                        "pointerdown",
                        pointer_listener.as_ref().unchecked_ref(),
                    );
                    let _ = document.remove_event_listener_with_callback(
                        "keydown",
                        key_listener.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    // Fully absent while closed: no focus, no hit-testing.
    if !open {
        return html! {};
    }

    let panel_class = classes!(
        "absolute",
        "z-50",
        "min-w-[10rem]",
        "rounded-md",
        "border",
        "border-[var(--border)]",
        "bg-[var(--surface)]",
        "p-1",
        "shadow-[0_8px_24px_rgba(0,0,0,0.12)]",
        placement_classes(props.align, props.side),
        props.class.clone(),
    );

    html! {
        <div
            ref={menu.content_ref()}
            role="menu"
            class={panel_class}
            style={offset_style(props.side, props.side_offset)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DropdownMenuItemProps {
    pub menu: MenuController,

    #[prop_or_default]
    pub disabled: bool,

    #[prop_or_default]
    pub on_activate: Callback<MouseEvent>,

    #[prop_or_default]
    pub children: Children,

    #[prop_or_default]
    pub class: Classes,
}

// Activation decision for one row, kept free of the DOM so it can be
// exercised directly: an enabled row fires its callback exactly once and then
// closes the menu, a disabled row does neither.
fn activate_item<T>(disabled: bool, on_activate: &Callback<T>, event: T, close: impl FnOnce()) {
    if disabled {
        return;
    }
    on_activate.emit(event);
    close();
}

/// One selectable row. Activation fires the callback once, then closes the
/// parent menu; disabled rows ignore activation and leave the tab order.
#[function_component(DropdownMenuItem)]
pub fn dropdown_menu_item(props: &DropdownMenuItemProps) -> Html {
    let DropdownMenuItemProps {
        menu,
        disabled,
        on_activate,
        children,
        class,
    } = props;

    let onclick = {
        let menu = menu.clone();
        let on_activate = on_activate.clone();
        let disabled = *disabled;
        Callback::from(move |event: MouseEvent| {
            activate_item(disabled, &on_activate, event, || menu.close());
        })
    };

    let item_class = classes!(
        "flex",
        "w-full",
        "items-center",
        "rounded-sm",
        "px-3",
        "py-2",
        "text-left",
        "text-sm",
        if *disabled {
            classes!("cursor-default", "text-[var(--text-muted)]", "opacity-60")
        } else {
            classes!("cursor-pointer", "hover:bg-[var(--surface-alt)]")
        },
        class.clone(),
    );

    html! {
        <button
            type="button"
            role="menuitem"
            class={item_class}
            {onclick}
            tabindex={if *disabled { "-1" } else { "0" }}
            aria-disabled={disabled.to_string()}
        >
            { for children.iter() }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;

    fn apply(state: MenuState, action: MenuAction) -> MenuState {
        state.apply(&action)
    }

    #[test]
    fn starts_closed() {
        assert!(!MenuState::default().open);
    }

    #[test]
    fn toggle_strictly_alternates() {
        let mut state = MenuState::default();
        for turn in 0..6 {
            state = apply(state, MenuAction::Toggle);
            assert_eq!(state.open, turn % 2 == 0);
        }
    }

    #[test]
    fn close_is_idempotent() {
        let open = apply(MenuState::default(), MenuAction::Toggle);
        assert!(open.open);

        let closed = apply(open, MenuAction::Close);
        assert!(!closed.open);
        // Escape while already closed stays a no-op.
        assert!(!apply(closed, MenuAction::Close).open);
    }

    #[test]
    fn set_open_takes_any_value() {
        let state = apply(MenuState::default(), MenuAction::SetOpen(true));
        assert!(state.open);
        assert!(apply(state, MenuAction::SetOpen(true)).open);
        assert!(!apply(state, MenuAction::SetOpen(false)).open);
    }

    #[test]
    fn notifications_report_the_reduced_value() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let notify = {
            let seen = seen.clone();
            Callback::from(move |open: bool| seen.borrow_mut().push(open))
        };
        let command = |action| MenuCommand {
            action,
            notify: notify.clone(),
        };

        let mut state = Rc::new(MenuState::default());
        for _ in 0..3 {
            state = state.reduce(command(MenuAction::Toggle));
        }
        assert!(state.open);
        assert_eq!(*seen.borrow(), vec![true, false, true]);

        // Repeated closes keep reporting the forced value.
        state = state.reduce(command(MenuAction::Close));
        let state = state.reduce(command(MenuAction::Close));
        assert!(!state.open);
        assert_eq!(&seen.borrow()[3..], &[false, false]);
    }

    #[test]
    fn enabled_item_fires_once_then_closes() {
        let fired = Rc::new(RefCell::new(0));
        let on_activate = {
            let fired = fired.clone();
            Callback::from(move |_: ()| *fired.borrow_mut() += 1)
        };
        let closed = Cell::new(false);

        activate_item(false, &on_activate, (), || closed.set(true));
        assert_eq!(*fired.borrow(), 1);
        assert!(closed.get());
    }

    #[test]
    fn disabled_item_never_fires_or_closes() {
        let fired = Rc::new(RefCell::new(0));
        let on_activate = {
            let fired = fired.clone();
            Callback::from(move |_: ()| *fired.borrow_mut() += 1)
        };
        let closed = Cell::new(false);

        activate_item(true, &on_activate, (), || closed.set(true));
        assert_eq!(*fired.borrow(), 0);
        assert!(!closed.get());
    }

    #[test]
    fn observer_identity_survives_clone() {
        let observer: Callback<bool> = Callback::noop();
        assert_eq!(observer, observer.clone());
        assert_ne!(observer, Callback::noop());
    }

    #[test]
    fn placement_pairs_are_distinct() {
        let combos = [
            (MenuAlign::End, MenuSide::Top),
            (MenuAlign::Start, MenuSide::Right),
            (MenuAlign::Center, MenuSide::Bottom),
            (MenuAlign::Center, MenuSide::Left),
        ];
        for (index, (align_a, side_a)) in combos.iter().enumerate() {
            for (align_b, side_b) in combos.iter().skip(index + 1) {
                assert_ne!(
                    placement_classes(*align_a, *side_a),
                    placement_classes(*align_b, *side_b),
                );
            }
        }
    }

    #[test]
    fn offset_follows_side_axis() {
        assert_eq!(offset_style(MenuSide::Bottom, 4), "margin-top: 4px;");
        assert_eq!(offset_style(MenuSide::Top, 8), "margin-bottom: 8px;");
        assert_eq!(offset_style(MenuSide::Left, 2), "margin-right: 2px;");
        assert_eq!(offset_style(MenuSide::Right, 0), "margin-left: 0px;");
    }
}
