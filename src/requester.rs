use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt};
use serde_json::Value;
use tracing::{debug, error, info};

use crate::error::{AskError, AskResult};
use crate::messages::Messages;
use crate::models::{AnswerRequest, render_answer};
use crate::page::{ANSWER_ELEMENT, Page, QUESTION_ELEMENT};
use crate::transport::AnswerTransport;

/// How a single invocation of [`AnswerRequester::request_answer`] settled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AskOutcome {
    /// The answer element now shows this text
    Answered(String),
    /// The question was empty; nothing was sent
    EmptyQuestion,
    /// The request or its response failed; the answer element is untouched
    Failed,
}

/// Reads the question from a page, asks the backend and renders the answer.
///
/// Holds no state between invocations. Overlapping invocations are not
/// deduplicated or cancelled, so the answer element shows whichever
/// successful response is rendered last.
pub struct AnswerRequester<P, T> {
    page: Arc<P>,
    transport: Arc<T>,
    messages: Messages,
}

impl<P, T> Clone for AnswerRequester<P, T> {
    fn clone(&self) -> Self {
        Self {
            page: Arc::clone(&self.page),
            transport: Arc::clone(&self.transport),
            messages: self.messages.clone(),
        }
    }
}

impl<P, T> AnswerRequester<P, T>
where
    P: Page + 'static,
    T: AnswerTransport + 'static,
{
    pub fn new(page: P, transport: T, messages: Messages) -> Self {
        Self::from_shared(Arc::new(page), Arc::new(transport), messages)
    }

    pub fn from_shared(page: Arc<P>, transport: Arc<T>, messages: Messages) -> Self {
        Self {
            page,
            transport,
            messages,
        }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    /// Reads and validates the question immediately, then returns the
    /// request as a future that owns everything it needs.
    ///
    /// An empty question is alerted before this returns and the future
    /// resolves without touching the network.
    pub fn request_answer(&self) -> BoxFuture<'static, AskOutcome> {
        let request = match self
            .page
            .value(QUESTION_ELEMENT)
            .and_then(AnswerRequest::new)
        {
            Ok(request) => request,
            Err(AskError::EmptyQuestion) => {
                debug!("Empty question, not sending a request");
                self.page.alert(self.messages.empty_question);
                return futures::future::ready(AskOutcome::EmptyQuestion).boxed();
            }
            Err(e) => {
                self.report_failure(&e);
                return futures::future::ready(AskOutcome::Failed).boxed();
            }
        };

        let this = self.clone();
        async move {
            match this.fetch_and_render(&request).await {
                Ok(answer) => AskOutcome::Answered(answer),
                Err(e) => {
                    this.report_failure(&e);
                    AskOutcome::Failed
                }
            }
        }
        .boxed()
    }

    async fn fetch_and_render(&self, request: &AnswerRequest) -> AskResult<String> {
        info!("Asking question: {}", request.question);

        let body = self.transport.get(&request.path()).await?;
        let parsed: Value = serde_json::from_str(&body)?;
        let answer = render_answer(&parsed)?;

        self.page.set_text(ANSWER_ELEMENT, &answer)?;
        info!("Rendered answer for question: {}", request.question);
        Ok(answer)
    }

    fn report_failure(&self, e: &AskError) {
        error!("Error: {}", e);
        self.page.alert(self.messages.request_failed);
    }
}
