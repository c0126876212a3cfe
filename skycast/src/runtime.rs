//! The event/action/effect loop.
//!
//! One `tokio::select!` drains two sources: terminal events (mapped to
//! actions by the UI) and the action channel (fed by completed tasks and
//! by the loop itself). Dispatch runs the reducer; returned effects are
//! executed here through the keyed task manager.

use std::io;
use std::time::Duration;

use ratatui::{backend::Backend, Terminal};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use skycast_core::{
    build_http_client, ApiConfig, ApiError, ForecastClient, GeocodeClient, LocateClient,
};

use crate::action::Action;
use crate::effect::{DispatchResult, Effect};
use crate::events::{spawn_event_poller, spawn_ticker, EventKind};
use crate::state::{AppState, LOADING_TICK_MS, SUGGEST_DEBOUNCE_MS};
use crate::store::Store;
use crate::tasks::{TaskKey, TaskManager, TASK_CITY_WEATHER, TASK_LIVE_WEATHER, TASK_POSITION, TASK_SUGGEST};
use crate::ui::Ui;

/// The three endpoint clients, sharing one HTTP client.
#[derive(Clone)]
pub struct Clients {
    pub forecast: ForecastClient,
    pub geocode: GeocodeClient,
    pub locate: LocateClient,
}

impl Clients {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = build_http_client(config)?;
        Ok(Self {
            forecast: ForecastClient::new(http.clone(), config),
            geocode: GeocodeClient::new(http.clone(), config),
            locate: LocateClient::new(http, config),
        })
    }
}

pub struct Runtime {
    store: Store,
    clients: Clients,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    tasks: TaskManager,
    should_render: bool,
}

impl Runtime {
    pub fn new(state: AppState, clients: Clients) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let tasks = TaskManager::new(action_tx.clone());
        Self {
            store: Store::new(state),
            clients,
            action_tx,
            action_rx,
            tasks,
            should_render: true,
        }
    }

    /// Queue an action from outside the loop (startup kicks).
    pub fn enqueue(&self, action: Action) {
        let _ = self.action_tx.send(action);
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    /// Run until a `Quit` action arrives.
    pub async fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        ui: &mut Ui,
    ) -> io::Result<()> {
        let (event_tx, mut event_rx) = mpsc::unbounded_channel::<EventKind>();
        let cancel_token = CancellationToken::new();
        let _poller = spawn_event_poller(event_tx, cancel_token.clone());
        let _ticker = spawn_ticker(
            self.action_tx.clone(),
            Duration::from_millis(LOADING_TICK_MS),
            cancel_token.clone(),
        );

        loop {
            if self.should_render {
                terminal.draw(|frame| {
                    ui.render(frame, frame.area(), self.store.state());
                })?;
                self.should_render = false;
            }

            tokio::select! {
                Some(event) = event_rx.recv() => {
                    for action in ui.map_event(&event, self.store.state()) {
                        let _ = self.action_tx.send(action);
                    }
                }

                Some(action) = self.action_rx.recv() => {
                    if matches!(action, Action::Quit) {
                        break;
                    }
                    let DispatchResult { changed, effects } = self.store.dispatch(action);
                    for effect in effects {
                        self.handle_effect(effect);
                    }
                    if changed {
                        self.should_render = true;
                    }
                }

                else => break,
            }
        }

        cancel_token.cancel();
        self.tasks.cancel_all();
        Ok(())
    }

    /// Execute one effect by spawning (or cancelling) a keyed task.
    pub fn handle_effect(&mut self, effect: Effect) {
        match effect {
            Effect::FetchPosition => {
                let locate = self.clients.locate.clone();
                self.tasks.spawn(TASK_POSITION, async move {
                    match locate.current().await {
                        Ok(coord) => Action::PositionDidFix(coord),
                        Err(e) => {
                            tracing::warn!(error = %e, "position fix failed");
                            Action::PositionDidError(e.user_message().to_string())
                        }
                    }
                });
            }

            Effect::FetchLiveWeather { coord } => {
                let forecast = self.clients.forecast.clone();
                self.tasks.spawn(TASK_LIVE_WEATHER, async move {
                    match forecast.current(coord).await {
                        Ok(reading) => Action::LiveWeatherDidLoad(reading),
                        Err(e) => {
                            tracing::warn!(error = %e, "live weather fetch failed");
                            Action::LiveWeatherDidError(e.user_message().to_string())
                        }
                    }
                });
            }

            Effect::ScheduleSuggest { query, seq } => {
                let geocode = self.clients.geocode.clone();
                self.tasks.debounce(
                    TASK_SUGGEST,
                    Duration::from_millis(SUGGEST_DEBOUNCE_MS),
                    async move {
                        match geocode.search(&query).await {
                            Ok(places) => Action::SuggestDidLoad { seq, places },
                            Err(e) => {
                                tracing::debug!(error = %e, %query, "suggestion fetch failed");
                                Action::SuggestDidError {
                                    seq,
                                    message: e.user_message().to_string(),
                                }
                            }
                        }
                    },
                );
            }

            Effect::CancelSuggest => {
                self.tasks.cancel(&TaskKey::new(TASK_SUGGEST));
            }

            Effect::FetchCityWeather { coord } => {
                let forecast = self.clients.forecast.clone();
                // Keyed: submitting a new city replaces an in-flight fetch
                // for the previous one.
                self.tasks.spawn(TASK_CITY_WEATHER, async move {
                    match forecast.current(coord).await {
                        Ok(reading) => Action::CityWeatherDidLoad(reading),
                        Err(e) => {
                            tracing::warn!(error = %e, "city weather fetch failed");
                            Action::CityWeatherDidError(e.user_message().to_string())
                        }
                    }
                });
            }
        }
    }

    #[cfg(test)]
    fn is_task_running(&self, key: &str) -> bool {
        self.tasks.is_running(&TaskKey::new(key))
    }
}
