use clap::Args;
use flipguess_core as game;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Flip(game::Number),
    NewGame,
}

fn card_classes(card: &game::CardView) -> Classes {
    let mut class = classes!(
        "card",
        match card.face {
            game::CardFace::Hidden => classes!(),
            game::CardFace::Revealed(_) => classes!("open"),
        }
    );
    if !card.enabled {
        class.push("locked");
    }
    class
}

fn status_class(status: game::GameStatus) -> &'static str {
    use game::GameStatus::*;
    match status {
        InProgress => "in-progress",
        Won => "win",
        Lost => "lose",
    }
}

#[derive(Properties, Clone, PartialEq)]
struct CardProps {
    card: game::CardView,
    label: AttrValue,
    callback: Callback<game::Number>,
}

#[function_component(CardCell)]
fn card_component(props: &CardProps) -> Html {
    let CardProps {
        card,
        label,
        callback,
    } = props.clone();

    let class = card_classes(&card);
    let onclick = Callback::from(move |e: MouseEvent| {
        e.stop_propagation();
        log::trace!("card {} tapped", card.value);
        callback.emit(card.value);
    });

    html! {
        <td>
            <button {class} {onclick} disabled={!card.enabled}>
                <span class="back">{label}</span>
            </button>
        </td>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random
    #[arg(short, long)]
    #[prop_or_default]
    pub seed: Option<u64>,
}

/// Two `Math.random` draws stitched into one 64-bit seed.
fn random_seed() -> u64 {
    let draw = || (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    (draw() << 32) | draw()
}

#[derive(Debug)]
pub(crate) struct GameView {
    controller: game::GameController,
    strings: game::Strings,
}

impl GameView {
    fn with_seed(seed: u64) -> Self {
        log::debug!("seed: {}", seed);
        Self {
            controller: game::GameController::new(game::GameConfig::classic(), seed),
            strings: Default::default(),
        }
    }

    /// Forwards a tap to the controller, returns whether the board needs a redraw.
    fn apply(&mut self, msg: Msg) -> bool {
        use Msg::*;

        match msg {
            Flip(number) => {
                log::debug!("flip card: {}", number);
                self.controller.flip_card(number).has_update()
            }
            NewGame => {
                self.controller.reset_session();
                true
            }
        }
    }

    fn board(&self) -> game::BoardView {
        game::BoardView::render(
            self.controller.state(),
            &self.strings,
            self.controller.config().columns,
        )
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self::with_seed(ctx.props().seed.unwrap_or_else(random_seed))
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        self.apply(msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let state = self.controller.state();
        let board = self.board();
        let class = classes!("flipguess", status_class(state.status()));

        let cb_new_game = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            NewGame
        });

        html! {
            <div {class}>
                <header>
                    <h1>{board.header.title.clone()}</h1>
                    <p class="target">{board.header.target.clone()}</p>
                    if let Some(result) = &board.result {
                        <p class="result">{result.clone()}</p>
                    }
                </header>
                <table>
                    {
                        for board.rows.iter().map(|row| html! {
                            <tr>
                                {
                                    for row.iter().map(|&card| {
                                        let label = AttrValue::from(card.face.label(&self.strings));
                                        let callback = ctx.link().callback(Flip);
                                        html! {
                                            <CardCell key={card.value} {card} {label} {callback}/>
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
                <footer>
                    <p>{board.footer.remaining_flips.clone()}</p>
                    <p>{board.footer.flip_count.clone()}</p>
                    <button class="reset" onclick={cb_new_game}>{board.footer.reset.clone()}</button>
                </footer>
            </div>
        }
    }
}
