use yew::prelude::*;

/// Seconds between consecutive characters while the pointer is over the
/// title; the release wave runs slightly faster.
const ENTER_STAGGER: f64 = 0.03;
const LEAVE_STAGGER: f64 = 0.02;

fn char_delay(index: usize, hovered: bool) -> f64 {
    let step = if hovered { ENTER_STAGGER } else { LEAVE_STAGGER };
    step * index as f64
}

#[derive(Properties, PartialEq)]
pub struct HoverTitleProps {
    pub text: String,
}

/// Headline whose characters rise and recolor in a left-to-right wave while
/// hovered, then settle back in a faster wave on release.
#[function_component(HoverTitle)]
pub fn hover_title(props: &HoverTitleProps) -> Html {
    let hovered = use_state_eq(|| false);

    let on_enter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let on_leave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    html! {
        <h1
            onmouseenter={on_enter}
            onmouseleave={on_leave}
            style="cursor: default; display: flex; overflow: hidden; margin: 0; \
                   font-size: 6rem; font-weight: 700; color: #fff;"
        >
            { for props.text.chars().enumerate().map(|(i, ch)| {
                let span_style = format!(
                    "display: inline-block; white-space: pre; \
                     transition: transform 0.3s {easing} {delay}s, color 0.3s {easing} {delay}s; \
                     transform: translateY({shift}); color: {color};",
                    easing = if *hovered { "ease-out" } else { "ease-in" },
                    delay = char_delay(i, *hovered),
                    shift = if *hovered { "-10px" } else { "0" },
                    color = if *hovered { "#3b82f6" } else { "currentColor" },
                );
                html! { <span style={span_style}>{ ch.to_string() }</span> }
            }) }
        </h1>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wave_starts_immediately_and_rises_with_index() {
        assert_eq!(char_delay(0, true), 0.0);
        assert_eq!(char_delay(0, false), 0.0);
        for i in 0..10 {
            assert!(char_delay(i, true) < char_delay(i + 1, true));
            assert!(char_delay(i, false) < char_delay(i + 1, false));
        }
    }

    #[test]
    fn release_wave_is_faster_than_entry() {
        assert!((char_delay(5, true) - 0.15).abs() < 1e-12);
        assert!((char_delay(5, false) - 0.10).abs() < 1e-12);
        assert!(char_delay(5, false) < char_delay(5, true));
    }
}
