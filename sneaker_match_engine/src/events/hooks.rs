use std::{future::Future, pin::Pin, sync::Arc};

use tokio::task::JoinHandle;

use crate::events::{EventHandler, EventProducer, Handler, MatchCreatedEvent};

#[derive(Default, Clone)]
pub struct EventProducers {
    pub match_created_producer: Vec<EventProducer<MatchCreatedEvent>>,
}

pub struct EventHandlers {
    pub on_match_created: Option<EventHandler<MatchCreatedEvent>>,
}

impl EventHandlers {
    pub fn new(buffer_size: usize, hooks: EventHooks) -> Self {
        let on_match_created = hooks.on_match_created.map(|f| EventHandler::new(buffer_size, f));
        Self { on_match_created }
    }

    pub fn producers(&self) -> EventProducers {
        let mut result = EventProducers::default();
        if let Some(handler) = &self.on_match_created {
            result.match_created_producer.push(handler.subscribe());
        }
        result
    }

    /// Spawns a consumer task per registered hook. Each task ends once all of its producers have been dropped and its
    /// in-flight jobs are done, so awaiting the returned handles is a clean shutdown.
    pub fn start_handlers(self) -> Vec<JoinHandle<()>> {
        let mut tasks = Vec::new();
        if let Some(handler) = self.on_match_created {
            tasks.push(tokio::spawn(async move {
                handler.start_handler().await;
            }));
        }
        tasks
    }
}

#[derive(Default, Clone)]
pub struct EventHooks {
    pub on_match_created: Option<Handler<MatchCreatedEvent>>,
}

impl EventHooks {
    pub fn on_match_created<F>(&mut self, f: F) -> &mut Self
    where F: (Fn(MatchCreatedEvent) -> Pin<Box<dyn Future<Output = ()> + Send>>) + Send + Sync + 'static {
        self.on_match_created = Some(Arc::new(f));
        self
    }
}
