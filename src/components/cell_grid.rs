use crate::model::{CellState, Flash};
use crate::util::image_path;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CellGridProps {
    pub cells: Vec<CellState>,
    pub on_cell_click: Callback<usize>,
}

#[function_component(CellGrid)]
pub fn cell_grid(props: &CellGridProps) -> Html {
    html! {
        <div id="cell-grid" style="display:grid; grid-template-columns:repeat(3, 96px); gap:10px; justify-content:center;">
            { for props.cells.iter().enumerate().map(|(index, cell)| {
                let onclick = {
                    let on_cell_click = props.on_cell_click.clone();
                    Callback::from(move |_: MouseEvent| on_cell_click.emit(index))
                };
                let class = match cell {
                    CellState::Clearing { flash: Flash::Correct, .. } => "cell correct-flash",
                    CellState::Clearing { flash: Flash::Wrong, .. } => "cell wrong-flash",
                    _ => "cell",
                };
                let content = match cell {
                    CellState::Occupied { item, .. } | CellState::Clearing { item, .. } => html! {
                        <img src={image_path(item)} alt={*item} style="width:72px; height:72px;" />
                    },
                    CellState::Empty => html! {},
                };
                html! { <div key={index} class={class} onclick={onclick}>{ content }</div> }
            }) }
        </div>
    }
}
