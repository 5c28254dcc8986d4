use yew::prelude::*;
use rand::thread_rng;

use crate::anim::grid::{row_grid, sweep_delay, sweep_delay_reversed, GridSpec, SWEEP_ROWS};
use crate::anim::shuffle::shuffled_ranks;

#[derive(Properties, PartialEq)]
pub struct VerticalPixelTransitionProps {
    pub active: bool,
    pub width: f64,
    pub height: f64,
}

/// Transposed sweep: 10 rows of 10vh blocks. The delay direction is swapped
/// relative to the horizontal variant, so entry sweeps from the bottom row
/// up and exit from the top row down.
#[function_component(VerticalPixelTransition)]
pub fn vertical_pixel_transition(props: &VerticalPixelTransitionProps) -> Html {
    let spec = row_grid(props.width, props.height);

    let row_ranks = use_memo(
        |spec: &GridSpec| {
            log::debug!("vertical wipe reshuffled: {} blocks", spec.block_count());
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
                    display: flex; flex-direction: column; overflow: hidden; z-index: 20; pointer-events: none;">
            { for row_ranks.iter().enumerate().map(|(row, ranks)| html! {
                <div style="width: 100%; height: 10vh; display: flex;">
                    { for ranks.iter().map(|&rank| {
                        let delay = if props.active {
                            sweep_delay_reversed(SWEEP_ROWS, row, rank)
                        } else {
                            sweep_delay(row, rank)
                        };
                        let block_style = format!(
                            "width: 10vh; height: 100%; background: #ff6a00; \
                             opacity: {opacity}; transition: opacity 0s linear {delay}s;",
                        );
                        html! { <div style={block_style}></div> }
                    }) }
                </div>
            }) }
        </div>
    }
}
