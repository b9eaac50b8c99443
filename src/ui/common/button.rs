use leptos::prelude::*;

use crate::core::{ButtonAction, ButtonSize, ButtonVariant, PointerState, Spring, button_style};
use crate::ui::frame_loop::FrameLoop;
use crate::ui::settings::use_motion_timings;

/// Pressable control that springs larger on hover and smaller while pressed
///
/// The action decides the element: `Navigate` renders a link, `Handler` a
/// plain button and `Submit` a submit button for the enclosing form.
#[component]
pub fn AnimatedButton(
    /// What a click does
    action: ButtonAction<Callback<()>>,
    /// Button variant style
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button size
    #[prop(default = ButtonSize::Default)]
    size: ButtonSize,
    /// Whether button is disabled
    #[prop(into, optional)]
    disabled: MaybeProp<bool>,
    /// Additional CSS classes
    #[prop(default = String::new(), into)]
    class: String,
    /// Button content (text or elements)
    children: Children,
) -> impl IntoView {
    let timings = use_motion_timings();
    let full_classes = if class.is_empty() {
        button_style(variant, size).class.to_string()
    } else {
        format!("{} {}", button_style(variant, size).class, class)
    };

    let pointer = StoredValue::new(PointerState::Rest);
    let spring = StoredValue::new(Spring::from_timings(&timings, 1.0));
    let last_frame = StoredValue::new(None::<f64>);
    let scale = RwSignal::new(1.0_f64);

    let frame = FrameLoop::new(move |timestamp| {
        let dt = last_frame
            .get_value()
            .map(|last| timestamp - last)
            .unwrap_or(0.0);
        last_frame.set_value(Some(timestamp));
        let moving = spring.try_update_value(|s| s.step(dt)).unwrap_or(false);
        scale.set(spring.with_value(|s| s.value()));
        if !moving {
            last_frame.set_value(None);
        }
        moving
    });

    let transition = move |next: fn(PointerState) -> PointerState| {
        let state = pointer.get_value();
        let next = next(state);
        if next == state {
            return;
        }
        pointer.set_value(next);
        spring.update_value(|s| s.set_target(next.target_scale(&timings)));
        frame.start();
    };

    let style = move || format!("transform: scale({:.4});", scale.get());
    let is_disabled = move || disabled.get().unwrap_or(false);

    match action {
        ButtonAction::Navigate(href) => view! {
            <a
                href=href
                class=full_classes
                style=style
                on:pointerenter=move |_| transition(PointerState::on_enter)
                on:pointerleave=move |_| transition(PointerState::on_leave)
                on:pointerdown=move |_| transition(PointerState::on_press)
                on:pointerup=move |_| transition(PointerState::on_release)
            >
                {children()}
            </a>
        }
        .into_any(),
        ButtonAction::Handler(on_click) => view! {
            <button
                type="button"
                class=full_classes
                style=style
                disabled=is_disabled
                on:click=move |_| on_click.run(())
                on:pointerenter=move |_| transition(PointerState::on_enter)
                on:pointerleave=move |_| transition(PointerState::on_leave)
                on:pointerdown=move |_| transition(PointerState::on_press)
                on:pointerup=move |_| transition(PointerState::on_release)
            >
                {children()}
            </button>
        }
        .into_any(),
        ButtonAction::Submit => view! {
            <button
                type="submit"
                class=full_classes
                style=style
                disabled=is_disabled
                on:pointerenter=move |_| transition(PointerState::on_enter)
                on:pointerleave=move |_| transition(PointerState::on_leave)
                on:pointerdown=move |_| transition(PointerState::on_press)
                on:pointerup=move |_| transition(PointerState::on_release)
            >
                {children()}
            </button>
        }
        .into_any(),
    }
}
