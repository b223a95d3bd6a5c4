//! Order Persistence
//!
//! Fire-and-forget save of the dropped order. The list already shows the new
//! order, so a failed save only hides the busy indicator and logs.

use std::future::Future;

use leptos::task::spawn_local;

use crate::commands;
use crate::error::ReorderError;
use crate::models::OrderRequest;

/// Transient "saving" marker shown while a request is outstanding
pub trait BusyIndicator {
    fn show(&self);
    fn hide(&self);
}

/// Save the order through the page's ajax channel
pub fn persist<B>(cmid: u32, ids: &[u32], method: String, busy: B)
where
    B: BusyIndicator + 'static,
{
    spawn_local(persist_with(cmid, ids, busy, move |request| async move {
        commands::update_questions_order(&method, &request).await
    }));
}

/// Show `busy` right away and return the future that sends the order once
/// and hides `busy` when the call settles
pub fn persist_with<B, F, Fut>(cmid: u32, ids: &[u32], busy: B, send: F) -> impl Future<Output = ()>
where
    B: BusyIndicator,
    F: FnOnce(OrderRequest) -> Fut,
    Fut: Future<Output = Result<(), ReorderError>>,
{
    let request = OrderRequest::new(cmid, ids);
    busy.show();
    settle(request, busy, send)
}

async fn settle<B, F, Fut>(request: OrderRequest, busy: B, send: F)
where
    B: BusyIndicator,
    F: FnOnce(OrderRequest) -> Fut,
    Fut: Future<Output = Result<(), ReorderError>>,
{
    let cmid = request.cmid;
    let itemorder = request.itemorder.clone();
    match send(request).await {
        Ok(()) => log::info!("saved order for cmid {}: {}", cmid, itemorder),
        Err(e) => log::warn!("order for cmid {} not saved: {}", cmid, e),
    }
    busy.hide();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeSpinner {
        events: Rc<RefCell<Vec<&'static str>>>,
    }

    impl BusyIndicator for FakeSpinner {
        fn show(&self) {
            self.events.borrow_mut().push("show");
        }
        fn hide(&self) {
            self.events.borrow_mut().push("hide");
        }
    }

    #[tokio::test]
    async fn test_indicator_shown_before_send_and_hidden_after() {
        let spinner = FakeSpinner::default();
        let sent = Rc::new(RefCell::new(Vec::new()));
        let sent_log = sent.clone();
        let seen_at_send = spinner.events.clone();

        let pending = persist_with(5, &[30, 20, 10], spinner.clone(), move |request| async move {
            assert_eq!(*seen_at_send.borrow(), vec!["show"]);
            sent_log.borrow_mut().push(request);
            Ok(())
        });
        // Shown as soon as the drop hands over the order
        assert_eq!(*spinner.events.borrow(), vec!["show"]);
        assert!(sent.borrow().is_empty());

        pending.await;
        assert_eq!(*spinner.events.borrow(), vec!["show", "hide"]);
        assert_eq!(
            *sent.borrow(),
            vec![OrderRequest {
                cmid: 5,
                itemorder: "30,20,10".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn test_failure_still_hides_indicator() {
        let spinner = FakeSpinner::default();
        let calls = Rc::new(RefCell::new(0));
        let counter = calls.clone();

        persist_with(5, &[1, 2], spinner.clone(), move |_| async move {
            *counter.borrow_mut() += 1;
            Err(ReorderError::Remote {
                method: "mod_feedback_update_questions_order".to_string(),
                message: "network down".to_string(),
            })
        })
        .await;

        // One attempt, no retry
        assert_eq!(*calls.borrow(), 1);
        assert_eq!(*spinner.events.borrow(), vec!["show", "hide"]);
    }
}
