//! Pressable control: style table, pointer feedback and click action

use super::motion::MotionTimings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    #[default]
    Default,
    Small,
    Large,
}

/// Fully resolved classes for one variant/size combination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonStyle {
    pub class: &'static str,
}

const fn style(class: &'static str) -> ButtonStyle {
    ButtonStyle { class }
}

/// Indexed by `[variant][size]`
static BUTTON_STYLES: [[ButtonStyle; 3]; 3] = [
    [
        style("btn-base bg-accent-blue text-white hover:bg-accent-blue/90 h-11 px-8"),
        style("btn-base bg-accent-blue text-white hover:bg-accent-blue/90 h-9 rounded-md px-4"),
        style("btn-base bg-accent-blue text-white hover:bg-accent-blue/90 h-12 rounded-md px-10 text-base"),
    ],
    [
        style("btn-base bg-primary text-primary-foreground hover:bg-primary/90 h-11 px-8"),
        style("btn-base bg-primary text-primary-foreground hover:bg-primary/90 h-9 rounded-md px-4"),
        style("btn-base bg-primary text-primary-foreground hover:bg-primary/90 h-12 rounded-md px-10 text-base"),
    ],
    [
        style("btn-base hover:bg-accent hover:text-accent-foreground h-11 px-8"),
        style("btn-base hover:bg-accent hover:text-accent-foreground h-9 rounded-md px-4"),
        style("btn-base hover:bg-accent hover:text-accent-foreground h-12 rounded-md px-10 text-base"),
    ],
];

/// Look up the style descriptor for a variant/size pair
pub fn button_style(variant: ButtonVariant, size: ButtonSize) -> &'static ButtonStyle {
    let row = match variant {
        ButtonVariant::Primary => 0,
        ButtonVariant::Secondary => 1,
        ButtonVariant::Ghost => 2,
    };
    let col = match size {
        ButtonSize::Default => 0,
        ButtonSize::Small => 1,
        ButtonSize::Large => 2,
    };
    &BUTTON_STYLES[row][col]
}

/// Transient pointer interaction with a control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerState {
    #[default]
    Rest,
    Hover,
    Pressed,
}

impl PointerState {
    /// Scale the control springs towards in this state
    pub fn target_scale(&self, timings: &MotionTimings) -> f64 {
        match self {
            PointerState::Rest => 1.0,
            PointerState::Hover => timings.hover_scale,
            PointerState::Pressed => timings.press_scale,
        }
    }

    pub fn on_enter(self) -> Self {
        PointerState::Hover
    }

    pub fn on_leave(self) -> Self {
        PointerState::Rest
    }

    pub fn on_press(self) -> Self {
        PointerState::Pressed
    }

    /// Releasing inside the control returns to hover
    pub fn on_release(self) -> Self {
        match self {
            PointerState::Pressed => PointerState::Hover,
            other => other,
        }
    }
}

/// What a click does; one action per control
#[derive(Clone)]
pub enum ButtonAction<H> {
    /// Follow a link
    Navigate(&'static str),
    /// Run a caller-supplied handler
    Handler(H),
    /// Submit the enclosing form, whose handler does the work
    Submit,
}

impl<H> ButtonAction<H> {
    pub fn href(&self) -> Option<&'static str> {
        match self {
            ButtonAction::Navigate(href) => Some(*href),
            _ => None,
        }
    }

    pub fn handler(&self) -> Option<&H> {
        match self {
            ButtonAction::Handler(handler) => Some(handler),
            _ => None,
        }
    }

    pub fn is_submit(&self) -> bool {
        matches!(self, ButtonAction::Submit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARIANTS: [ButtonVariant; 3] = [
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Ghost,
    ];
    const SIZES: [ButtonSize; 3] = [ButtonSize::Default, ButtonSize::Small, ButtonSize::Large];

    #[test]
    fn test_every_combination_is_distinct() {
        let mut seen = Vec::new();
        for variant in VARIANTS {
            for size in SIZES {
                let class = button_style(variant, size).class;
                assert!(class.starts_with("btn-base"));
                assert!(!seen.contains(&class));
                seen.push(class);
            }
        }
    }

    #[test]
    fn test_defaults_resolve_to_primary_default() {
        let style = button_style(ButtonVariant::default(), ButtonSize::default());
        assert!(style.class.contains("bg-accent-blue"));
        assert!(style.class.contains("h-11"));
    }

    #[test]
    fn test_small_secondary_classes() {
        let class = button_style(ButtonVariant::Secondary, ButtonSize::Small).class;
        assert!(class.contains("bg-primary"));
        assert!(class.contains("h-9"));
    }

    #[test]
    fn test_pointer_scales() {
        let timings = MotionTimings::default();
        let state = PointerState::default();
        assert_eq!(state.target_scale(&timings), 1.0);

        let hovered = state.on_enter();
        assert_eq!(hovered.target_scale(&timings), 1.05);
        let pressed = hovered.on_press();
        assert_eq!(pressed.target_scale(&timings), 0.95);
        assert_eq!(pressed.on_release(), PointerState::Hover);
        assert_eq!(pressed.on_leave(), PointerState::Rest);
        assert_eq!(PointerState::Rest.on_release(), PointerState::Rest);
    }

    #[test]
    fn test_action_is_exclusive() {
        let navigate: ButtonAction<fn()> = ButtonAction::Navigate("/contact");
        assert_eq!(navigate.href(), Some("/contact"));
        assert!(navigate.handler().is_none());

        let handler: ButtonAction<u8> = ButtonAction::Handler(7);
        assert_eq!(handler.href(), None);
        assert_eq!(handler.handler(), Some(&7));
        assert!(!handler.is_submit());

        assert!(ButtonAction::<u8>::Submit.is_submit());
    }
}
