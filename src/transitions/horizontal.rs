use yew::prelude::*;
use rand::thread_rng;

use crate::anim::grid::{column_grid, sweep_delay, sweep_delay_reversed, GridSpec, SWEEP_COLUMNS};
use crate::anim::shuffle::shuffled_ranks;

#[derive(Properties, PartialEq)]
pub struct HorizontalPixelTransitionProps {
    pub active: bool,
    pub width: f64,
    pub height: f64,
}

/// Pixel wipe that sweeps across the columns: entering blocks fire from the
/// left edge outward, exiting blocks from the right edge back, with the
/// shuffled rank jittering each column's order.
#[function_component(HorizontalPixelTransition)]
pub fn horizontal_pixel_transition(props: &HorizontalPixelTransitionProps) -> Html {
    let spec = column_grid(props.width, props.height);

    let column_ranks = use_memo(
        |spec: &GridSpec| {
            log::debug!("horizontal wipe reshuffled: {} blocks", spec.block_count());
            let mut rng = thread_rng();
            (0..spec.lines)
                .map(|_| shuffled_ranks(spec.cells_per_line, &mut rng))
                .collect::<Vec<Vec<usize>>>()
        },
        spec,
    );

    let opacity = if props.active { 1 } else { 0 };

    html! {
        <div style="position: fixed; top: 0; left: 0; width: 100%; height: 100vh; \
                    display: flex; overflow: hidden; z-index: 20; pointer-events: none;">
            { for column_ranks.iter().enumerate().map(|(column, ranks)| html! {
                <div style="width: 5vw; height: 100%; display: flex; flex-direction: column;">
                    { for ranks.iter().map(|&rank| {
                        let delay = if props.active {
                            sweep_delay(column, rank)
                        } else {
                            sweep_delay_reversed(SWEEP_COLUMNS, column, rank)
                        };
                        let block_style = format!(
                            "width: 100%; height: 5vw; background: #ff6a00; \
                             opacity: {opacity}; transition: opacity 0s linear {delay}s;",
                        );
                        html! { <div style={block_style}></div> }
                    }) }
                </div>
            }) }
        </div>
    }
}
