use crate::config::Config;
use crate::fetch::Fetch;
use crate::invoker::Invoker;
use crate::output::Output;
use crate::request::Request;
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use std::rc::Rc;
use tracing::debug;
use tracing::warn;

/// Click handler attached to a trigger, the returned future is the roll
pub type Handler = Box<dyn Fn() -> LocalBoxFuture<'static, ()>>;

/// Document the binder scans for triggers
pub trait Page {
    type Trigger: Trigger + 'static;

    /// All elements matching `selector`, in document order
    fn triggers(&self, selector: &str) -> Vec<Self::Trigger>;
}

/// Element that starts a roll when clicked
pub trait Trigger: Clone {
    type Output: Output;

    /// Value of the data attribute `name`
    fn data(&self, name: &str) -> Option<String>;

    /// First element matching `selector` under the trigger's parent
    fn output(&self, selector: &str) -> Option<Self::Output>;

    fn is_marked(&self, name: &str) -> bool;

    fn mark(&self, name: &str);

    fn on_click(&self, handler: Handler);
}

/// Attach roll handlers to the triggers of a page
pub struct Binder<F> {
    invoker: Rc<Invoker<F>>,
    config: Rc<Config>,
}

impl<F> Clone for Binder<F> {
    fn clone(&self) -> Self {
        Binder {
            invoker: Rc::clone(&self.invoker),
            config: Rc::clone(&self.config),
        }
    }
}

impl<F: Fetch + 'static> Binder<F> {
    pub fn new(fetch: F, config: Config) -> Self {
        Binder {
            invoker: Rc::new(Invoker::with_config(fetch, &config)),
            config: Rc::new(config),
        }
    }

    /// Bind every trigger not bound yet, return how many were bound now
    pub fn bind<P: Page>(&self, page: &P) -> usize {
        let triggers = page.triggers(&self.config.trigger_selector);
        if triggers.is_empty() {
            warn!(
                "No `{}` triggers on the page",
                self.config.trigger_selector
            );
            return 0;
        }
        let mut bound = 0;
        for trigger in triggers {
            if trigger.is_marked(&self.config.bound_attr) {
                debug!("Trigger already bound, skipping");
                continue;
            }
            trigger.mark(&self.config.bound_attr);
            trigger.on_click(self.handler(trigger.clone()));
            bound += 1;
        }
        debug!("Bound {} roll triggers", bound);
        bound
    }

    fn handler<T: Trigger + 'static>(&self, trigger: T) -> Handler {
        let binder = self.clone();
        Box::new(move || {
            let binder = binder.clone();
            let trigger = trigger.clone();
            async move { binder.click(&trigger).await }.boxed_local()
        })
    }

    /// Read the request from `trigger` now and roll into its output
    pub async fn click<T: Trigger>(&self, trigger: &T) {
        let request = self.request_for(trigger);
        let output = trigger.output(&self.config.output_selector);
        if output.is_none() {
            debug!(
                "No `{}` next to the trigger for {}",
                self.config.output_selector, request
            );
        }
        self.invoker
            .roll(&request, output.as_ref().map(|o| o as &dyn Output))
            .await;
    }

    fn request_for<T: Trigger>(&self, trigger: &T) -> Request {
        let read = |name: &str| {
            trigger.data(name).unwrap_or_else(|| {
                warn!("Trigger has no `{}`", name);
                String::new()
            })
        };
        Request::new(
            read(&self.config.character_attr),
            read(&self.config.attribute_attr),
            read(&self.config.skill_attr),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::fetch::Response;
    use crate::tests::GatedFetch;
    use crate::tests::MockFetch;
    use crate::tests::MockOutput;
    use crate::tests::MockPage;
    use crate::tests::MockTrigger;
    use crate::tests::YieldNow;
    use futures::executor::block_on;

    fn answering_seven() -> MockFetch {
        MockFetch::answering(|| Ok(Response::ok(r#"{"result": 7}"#)))
    }

    #[test]
    fn empty_page_binds_nothing() {
        let fetch = Rc::new(answering_seven());
        let binder = Binder::new(Rc::clone(&fetch), Config::default());
        assert_eq!(0, binder.bind(&MockPage::default()));
        assert!(fetch.paths().is_empty());
    }

    #[test]
    fn click_rolls_into_output() {
        let fetch = Rc::new(answering_seven());
        let binder = Binder::new(Rc::clone(&fetch), Config::default());
        let output = MockOutput::default();
        let trigger = MockTrigger::new("4", "Интуиция", "Чутьё").with_output(output.clone());
        let page = MockPage::new(vec![trigger.clone()]);

        assert_eq!(1, binder.bind(&page));
        assert!(output.text().is_none());
        block_on(trigger.click());
        assert_eq!(vec!["/characters/roll/4/Интуиция/Чутьё".to_owned()], fetch.paths());
        assert_eq!(Some("🎲 7".to_owned()), output.text());
    }

    #[test]
    fn each_trigger_gets_its_own_handler() {
        let fetch = Rc::new(answering_seven());
        let binder = Binder::new(Rc::clone(&fetch), Config::default());
        let first = MockOutput::default();
        let second = MockOutput::default();
        let page = MockPage::new(vec![
            MockTrigger::new("1", "Харизма", "Торг").with_output(first.clone()),
            MockTrigger::new("2", "Эмпатия", "Влияние").with_output(second.clone()),
        ]);

        assert_eq!(2, binder.bind(&page));
        block_on(page.trigger(1).click());
        assert!(first.text().is_none());
        assert_eq!(Some("🎲 7".to_owned()), second.text());
        assert_eq!(vec!["/characters/roll/2/Эмпатия/Влияние".to_owned()], fetch.paths());
    }

    #[test]
    fn missing_output_still_rolls() {
        let fetch = Rc::new(answering_seven());
        let binder = Binder::new(Rc::clone(&fetch), Config::default());
        let trigger = MockTrigger::new("1", "Мудрость", "Тактика");
        binder.bind(&MockPage::new(vec![trigger.clone()]));
        block_on(trigger.click());
        assert_eq!(1, fetch.paths().len());
    }

    #[test]
    fn failed_roll_from_click() {
        let fetch = Rc::new(MockFetch::answering(|| {
            Err(Error::Transport("offline".to_owned()))
        }));
        let binder = Binder::new(Rc::clone(&fetch), Config::default());
        let output = MockOutput::default();
        let trigger = MockTrigger::new("1", "a", "b").with_output(output.clone());
        binder.bind(&MockPage::new(vec![trigger.clone()]));
        block_on(trigger.click());
        assert_eq!(Some("⚠ Ошибка!".to_owned()), output.text());
    }

    #[test]
    fn missing_data_forwarded_empty() {
        let fetch = Rc::new(answering_seven());
        let binder = Binder::new(Rc::clone(&fetch), Config::default());
        let trigger = MockTrigger::default();
        binder.bind(&MockPage::new(vec![trigger.clone()]));
        block_on(trigger.click());
        assert_eq!(vec!["/characters/roll///".to_owned()], fetch.paths());
    }

    #[test]
    fn data_is_read_at_click_time() {
        let fetch = Rc::new(answering_seven());
        let binder = Binder::new(Rc::clone(&fetch), Config::default());
        let trigger = MockTrigger::new("1", "Сноровка", "Уклонение");
        binder.bind(&MockPage::new(vec![trigger.clone()]));
        trigger.set_data("data-skill", "Скрытность");
        block_on(trigger.click());
        assert_eq!(vec!["/characters/roll/1/Сноровка/Скрытность".to_owned()], fetch.paths());
    }

    #[test]
    fn rebinding_does_not_duplicate_handlers() {
        let fetch = Rc::new(answering_seven());
        let binder = Binder::new(Rc::clone(&fetch), Config::default());
        let trigger = MockTrigger::new("1", "a", "b");
        let page = MockPage::new(vec![trigger.clone()]);

        assert_eq!(1, binder.bind(&page));
        assert_eq!(0, binder.bind(&page));
        assert!(trigger.is_marked("data-roll-bound"));
        block_on(trigger.click());
        assert_eq!(1, fetch.paths().len());
    }

    #[test]
    fn new_triggers_are_bound_on_rerun() {
        let fetch = Rc::new(answering_seven());
        let binder = Binder::new(Rc::clone(&fetch), Config::default());
        let first = MockTrigger::new("1", "a", "b");
        binder.bind(&MockPage::new(vec![first.clone()]));
        let second = MockTrigger::new("2", "c", "d");
        assert_eq!(1, binder.bind(&MockPage::new(vec![first, second])));
    }

    #[test]
    fn custom_selectors_and_attributes() {
        let fetch = Rc::new(answering_seven());
        let config = Config {
            trigger_selector: ".dice".to_owned(),
            character_attr: "data-hero".to_owned(),
            ..Config::default()
        };
        let binder = Binder::new(Rc::clone(&fetch), config);
        let trigger = MockTrigger::default()
            .with_data("data-hero", "9")
            .with_data("data-attribute", "Интеллект")
            .with_data("data-skill", "Анализ");
        let page = MockPage::new(vec![trigger.clone()]);
        assert_eq!(1, binder.bind(&page));
        assert_eq!(Some(".dice".to_owned()), page.last_selector());
        block_on(trigger.click());
        assert_eq!(vec!["/characters/roll/9/Интеллект/Анализ".to_owned()], fetch.paths());
    }

    #[test]
    fn last_response_to_resolve_wins() {
        let (fetch, mut gates) = GatedFetch::with_gates(2);
        let fetch = Rc::new(fetch);
        let binder = Binder::new(Rc::clone(&fetch), Config::default());
        let output = MockOutput::default();
        let trigger = MockTrigger::new("1", "a", "b").with_output(output.clone());
        binder.bind(&MockPage::new(vec![trigger.clone()]));

        let second_gate = gates.pop().unwrap();
        let first_gate = gates.pop().unwrap();
        block_on(async move {
            futures::join!(trigger.click(), trigger.click(), async move {
                second_gate
                    .send(Ok(Response::ok(r#"{"result": 2}"#)))
                    .unwrap();
                YieldNow::default().await;
                first_gate
                    .send(Ok(Response::ok(r#"{"result": 1}"#)))
                    .unwrap();
            });
        });
        assert_eq!(2, output.writes());
        assert_eq!(Some("🎲 1".to_owned()), output.text());
    }
}
