use crate::ports::{TimeoutScheduler, WebAudio, WebClock};
use crate::utils::*;
use clap::Args;
use numemo_core as game;
use yew::prelude::*;

const GRID_COLUMNS: usize = 10;

type Controller =
    game::GameController<game::RandomRoundGenerator, WebClock, TimeoutScheduler, WebAudio>;

#[derive(Copy, Clone, Debug, PartialEq)]
enum ViewCellState {
    Empty,
    Shown(game::Digit),
    Concealed,
    Cleared(game::Digit),
    Missed(game::Digit),
}

impl ViewCellState {
    fn from_cell(cell: game::Cell, state: game::GameState) -> Self {
        use game::GameState::*;

        match (cell.value, cell.active, state) {
            (None, _, _) => Self::Empty,
            (Some(value), false, _) => Self::Cleared(value),
            (Some(value), true, Showing | Won) => Self::Shown(value),
            (Some(_), true, Playing) => Self::Concealed,
            (Some(value), true, Lost) => Self::Missed(value),
            (Some(_), true, Idle) => Self::Empty,
        }
    }

    fn label(self) -> String {
        use ViewCellState::*;
        match self {
            Shown(value) | Cleared(value) | Missed(value) => value.to_string(),
            Empty | Concealed => String::new(),
        }
    }
}

fn game_state_class(state: game::GameState) -> &'static str {
    use game::GameState::*;
    match state {
        Idle => "not-started",
        Showing => "showing",
        Playing => "in-progress",
        Won => "win",
        Lost => "lose",
    }
}

fn status_text(state: game::GameState, elapsed: &str) -> String {
    use game::GameState::*;
    match state {
        Idle => "Press start, then remember where the numbers are".to_string(),
        Showing => "Remember!".to_string(),
        Playing => "Click the numbers in ascending order".to_string(),
        Won => format!("You won in {}s", elapsed),
        Lost => "Wrong number, try again".to_string(),
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    CellClick(game::CellId),
    RevealElapsed(game::RoundId),
    StartGame,
    ResetGame,
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    id: game::CellId,
    cell_state: ViewCellState,
    #[prop_or_default]
    locked: bool,
    callback: Callback<game::CellId>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    use ViewCellState::*;

    let CellProps {
        id,
        cell_state,
        locked,
        callback,
    } = props.clone();

    let mut class = classes!(
        "cell",
        match cell_state {
            Empty => classes!(),
            Shown(value) => classes!("open", format!("num-{}", value)),
            Concealed => classes!("hidden"),
            Cleared(value) => classes!("open", "done", format!("num-{}", value)),
            Missed(value) => classes!("open", "missed", format!("num-{}", value)),
        }
    );
    if locked {
        class.push("locked");
    }

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("cell {} click", id);
        callback.emit(id);
    });

    html! {
        <td {class} {onclick}>{cell_state.label()}</td>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    pub(crate) seed: Option<u64>,

    /// How long the numbers stay visible, in milliseconds
    #[arg(long, default_value_t = game::SHOW_TIME_MS)]
    pub(crate) reveal_ms: game::Millis,

    /// Do not play any sounds
    #[arg(long)]
    pub(crate) mute: bool,
}

pub(crate) struct GameView {
    controller: Controller,
}

impl GameView {
    fn create_controller(ctx: &Context<Self>) -> Controller {
        let props = ctx.props();
        let seed = props.seed.unwrap_or_else(js_random_seed);
        log::debug!("seed: {}", seed);

        let config = game::GameConfig::default().with_reveal_ms(props.reveal_ms);
        game::GameController::new(
            config,
            game::RandomRoundGenerator::new(seed),
            WebClock::new(),
            TimeoutScheduler::new(ctx.link().clone()),
            WebAudio::new(props.mute),
        )
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            controller: GameView::create_controller(ctx),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            CellClick(id) => {
                log::debug!("click cell: {}", id);
                self.controller.click_cell(id).has_update()
            }
            RevealElapsed(round) => self.controller.reveal_elapsed(round).has_update(),
            StartGame => match self.controller.start_game() {
                Ok(outcome) => outcome.has_update(),
                Err(err) => {
                    log::error!("failed to deal round: {}", err);
                    false
                }
            },
            ResetGame => self.controller.reset_game().has_update(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let state = self.controller.state();
        let progress = format!(
            "{}/{}",
            self.controller.progress(),
            self.controller.config().number_count
        );
        let elapsed = self.controller.formatted_elapsed();
        let status = status_text(state, &elapsed);
        let game_state_class = classes!(game_state_class(state));
        let can_start = state.can_start();

        let cb_start = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            StartGame
        });
        let cb_reset = ctx.link().callback(|_: MouseEvent| ResetGame);

        html! {
            <div class="numemo">
                <nav>
                    <aside>{progress}</aside>
                    <span>
                        <button class={game_state_class} disabled={!can_start} onclick={cb_start}>{"Start"}</button>
                        <button onclick={cb_reset}>{"Reset"}</button>
                    </span>
                    <aside>{elapsed}</aside>
                </nav>
                <table class={state.is_playing().then_some("playable")}>
                    {
                        for self.controller.cells().chunks(GRID_COLUMNS).map(|row| html! {
                            <tr>
                                {
                                    for row.iter().map(|&cell| {
                                        let cell_state = ViewCellState::from_cell(cell, state);
                                        let locked = !(state.is_playing() && cell.is_clickable());
                                        let callback = ctx.link().callback(Msg::CellClick);
                                        html! {
                                            <CellView id={cell.id} {cell_state} {locked} {callback}/>
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
                <p class="status">{status}</p>
            </div>
        }
    }
}
