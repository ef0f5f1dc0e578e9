//! Essay store: draft state, submission, and image transcription.

use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{info, warn};

use redaai_api::essay::{EssayApi, EssaySubmission, ImageTranscription};
use redaai_api::problem::ApiProblem;
use redaai_core::essay::EssayState;

use crate::event::EssayEvent;
use crate::loading::LoadingGuard;
use crate::publisher::EventPublisher;
use crate::session_store::MSG_INVALID_CREDENTIALS;
use crate::user_store::UserStore;

pub const MSG_TEXT_TOO_SHORT: &str =
    "A redação deve conter pelo menos 500 caracteres que representam em média 7 linhas";
pub const MSG_TEXT_TOO_LONG: &str = "A redação deve conter no máximo 4000 caracteres";
pub const MSG_SUBMIT_FAILED: &str = "Erro ao enviar redação";
pub const MSG_TRANSCRIBE_FAILED: &str = "Erro ao transcrever imagem";

/// Observable essay submission store.
///
/// Holds the draft text and the ids of accepted submissions. Length
/// limits are enforced before any network call; the submission email
/// comes from the injected user profile store.
pub struct EssayStore {
    state: Mutex<EssayState>,
    essays: Arc<dyn EssayApi>,
    users: Arc<UserStore>,
    events: EventPublisher<EssayEvent>,
}

impl EssayStore {
    pub fn new(essays: Arc<dyn EssayApi>, users: Arc<UserStore>) -> Self {
        Self {
            state: Mutex::new(EssayState::new()),
            essays,
            users,
            events: EventPublisher::new(),
        }
    }

    /// Subscribes to state-change events.
    pub fn subscribe(&self) -> UnboundedReceiver<EssayEvent> {
        self.events.subscribe()
    }

    /// Snapshot of the current state.
    pub fn snapshot(&self) -> EssayState {
        self.lock().clone()
    }

    pub fn character_count(&self) -> usize {
        self.lock().character_count()
    }

    pub fn is_text_too_short(&self) -> bool {
        self.lock().is_text_too_short()
    }

    pub fn is_text_too_long(&self) -> bool {
        self.lock().is_text_too_long()
    }

    pub fn is_loading(&self) -> bool {
        self.lock().is_loading
    }

    pub fn error(&self) -> String {
        self.lock().error.clone()
    }

    /// Ids of accepted submissions, in submission order.
    pub fn submitted_ids(&self) -> Vec<String> {
        self.lock().submitted_ids.clone()
    }

    pub fn set_essay_text(&self, text: &str) {
        let characters = {
            let mut state = self.lock();
            state.essay_text = text.to_string();
            state.character_count()
        };
        self.events.publish(EssayEvent::TextChanged { characters });
    }

    /// Clears the draft and the transient flags. Submitted ids are kept.
    pub fn reset(&self) {
        self.lock().reset();
        self.events.publish(EssayEvent::TextChanged { characters: 0 });
    }

    // ------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------

    /// Submits the current draft for correction.
    ///
    /// The length limits are checked first; a draft outside them sets an
    /// explanatory error and returns `false` without a network call.
    pub async fn submit_essay(&self) -> bool {
        let submission = {
            let mut state = self.lock();
            if state.is_loading {
                warn!("submission ignored, another attempt is in flight");
                return false;
            }
            if state.is_text_too_short() {
                state.error = MSG_TEXT_TOO_SHORT.to_string();
                drop(state);
                self.events.publish(EssayEvent::ErrorChanged {
                    error: MSG_TEXT_TOO_SHORT.to_string(),
                });
                return false;
            }
            if state.is_text_too_long() {
                state.error = MSG_TEXT_TOO_LONG.to_string();
                drop(state);
                self.events.publish(EssayEvent::ErrorChanged {
                    error: MSG_TEXT_TOO_LONG.to_string(),
                });
                return false;
            }
            state.is_loading = true;
            state.error.clear();
            EssaySubmission {
                essay_text: state.essay_text.clone(),
                email: self.users.profile().email,
            }
        };
        self.events
            .publish(EssayEvent::LoadingChanged { loading: true });
        let _guard = LoadingGuard::new(|| self.finish_loading());

        info!(characters = submission.essay_text.chars().count(), "submitting essay");
        match self.essays.submit_essay(submission).await {
            Ok(response) => {
                self.lock().submitted_ids.push(response.essay_id.clone());
                self.events.publish(EssayEvent::Submitted {
                    essay_id: response.essay_id,
                });
                true
            }
            Err(ApiProblem::Unauthorized) => {
                self.set_error(MSG_INVALID_CREDENTIALS);
                false
            }
            Err(problem) => {
                warn!(%problem, "essay submission failed");
                self.set_error(MSG_SUBMIT_FAILED);
                false
            }
        }
    }

    /// Extracts essay text from a base64-encoded image.
    ///
    /// Single attempt; returns the extracted text on success.
    pub async fn transcribe_image(&self, image_base64: &str) -> Option<String> {
        {
            let mut state = self.lock();
            if state.is_loading {
                warn!("transcription ignored, another attempt is in flight");
                return None;
            }
            state.is_loading = true;
            state.error.clear();
        }
        self.events
            .publish(EssayEvent::LoadingChanged { loading: true });
        let _guard = LoadingGuard::new(|| self.finish_loading());

        let request = ImageTranscription {
            image_base64: image_base64.to_string(),
        };
        match self.essays.transcribe_image(request).await {
            Ok(response) => {
                self.events.publish(EssayEvent::Transcribed {
                    characters: response.extracted_text.chars().count(),
                });
                Some(response.extracted_text)
            }
            Err(ApiProblem::Unauthorized) => {
                self.set_error(MSG_INVALID_CREDENTIALS);
                None
            }
            Err(problem) => {
                warn!(%problem, "image transcription failed");
                self.set_error(MSG_TRANSCRIBE_FAILED);
                None
            }
        }
    }

    // ------------------------------------------------------------------

    fn lock(&self) -> MutexGuard<'_, EssayState> {
        self.state.lock().expect("essay state poisoned")
    }

    fn set_error(&self, message: &str) {
        self.lock().error = message.to_string();
        self.events.publish(EssayEvent::ErrorChanged {
            error: message.to_string(),
        });
    }

    fn finish_loading(&self) {
        let mut state = self.lock();
        if state.is_loading {
            state.is_loading = false;
            drop(state);
            self.events
                .publish(EssayEvent::LoadingChanged { loading: false });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use redaai_api::auth::AuthUser;
    use redaai_api::essay::{EssaySubmissionResponse, ImageTranscriptionResponse};
    use redaai_api::problem::ApiResult;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn accepted(essay_id: &str) -> EssaySubmissionResponse {
        EssaySubmissionResponse {
            status: Some(200),
            message: Some("queued".to_string()),
            request_id: Some("req-1".to_string()),
            essay_id: essay_id.to_string(),
            correction_status: Some("pending".to_string()),
            error: None,
        }
    }

    #[derive(Default)]
    struct FakeEssayApi {
        submit_calls: AtomicUsize,
        submit_result: Mutex<Option<ApiResult<EssaySubmissionResponse>>>,
        transcribe_result: Mutex<Option<ApiResult<ImageTranscriptionResponse>>>,
        last_submission: Mutex<Option<EssaySubmission>>,
    }

    #[async_trait]
    impl EssayApi for FakeEssayApi {
        async fn submit_essay(
            &self,
            submission: EssaySubmission,
        ) -> ApiResult<EssaySubmissionResponse> {
            self.submit_calls.fetch_add(1, Ordering::SeqCst);
            *self.last_submission.lock().unwrap() = Some(submission);
            self.submit_result
                .lock()
                .unwrap()
                .take()
                .unwrap_or(Err(ApiProblem::Unknown))
        }

        async fn transcribe_image(
            &self,
            _request: ImageTranscription,
        ) -> ApiResult<ImageTranscriptionResponse> {
            self.transcribe_result
                .lock()
                .unwrap()
                .take()
                .unwrap_or(Err(ApiProblem::Unknown))
        }
    }

    struct Harness {
        essays: Arc<FakeEssayApi>,
        users: Arc<UserStore>,
        store: EssayStore,
    }

    fn harness() -> Harness {
        let essays = Arc::new(FakeEssayApi::default());
        let users = Arc::new(UserStore::new());
        let store = EssayStore::new(essays.clone(), users.clone());
        Harness {
            essays,
            users,
            store,
        }
    }

    fn logged_in_user(users: &UserStore) {
        users.set_user(&AuthUser {
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            score: 0.0,
            last_access: None,
            created_at: None,
        });
    }

    #[tokio::test]
    async fn test_short_draft_skips_network() {
        let h = harness();
        h.store.set_essay_text(&"a".repeat(499));

        assert!(!h.store.submit_essay().await);

        assert_eq!(h.essays.submit_calls.load(Ordering::SeqCst), 0);
        assert_eq!(h.store.error(), MSG_TEXT_TOO_SHORT);
        assert!(!h.store.is_loading());
    }

    #[tokio::test]
    async fn test_long_draft_skips_network() {
        let h = harness();
        h.store.set_essay_text(&"a".repeat(4001));

        assert!(!h.store.submit_essay().await);

        assert_eq!(h.essays.submit_calls.load(Ordering::SeqCst), 0);
        assert_eq!(h.store.error(), MSG_TEXT_TOO_LONG);
    }

    #[tokio::test]
    async fn test_boundary_lengths_are_accepted() {
        for len in [500, 4000] {
            let h = harness();
            *h.essays.submit_result.lock().unwrap() = Some(Ok(accepted("abc123")));
            h.store.set_essay_text(&"a".repeat(len));

            assert!(h.store.submit_essay().await, "length {len} should submit");
            assert_eq!(h.essays.submit_calls.load(Ordering::SeqCst), 1);
        }
    }

    #[tokio::test]
    async fn test_submit_then_reset() {
        let h = harness();
        logged_in_user(&h.users);
        *h.essays.submit_result.lock().unwrap() = Some(Ok(accepted("abc123")));
        h.store.set_essay_text(&"a".repeat(2500));

        assert!(h.store.submit_essay().await);
        assert_eq!(h.store.submitted_ids(), vec!["abc123".to_string()]);
        // The draft survives until the caller resets.
        assert_eq!(h.store.character_count(), 2500);

        h.store.reset();
        let state = h.store.snapshot();
        assert!(state.essay_text.is_empty());
        assert!(state.error.is_empty());
        assert!(!state.is_loading);
        assert_eq!(state.submitted_ids, vec!["abc123".to_string()]);
    }

    #[tokio::test]
    async fn test_submission_carries_profile_email() {
        let h = harness();
        logged_in_user(&h.users);
        *h.essays.submit_result.lock().unwrap() = Some(Ok(accepted("abc123")));
        h.store.set_essay_text(&"a".repeat(600));

        assert!(h.store.submit_essay().await);

        let submission = h.essays.last_submission.lock().unwrap().take().unwrap();
        assert_eq!(submission.email, "test@example.com");
        assert_eq!(submission.essay_text.chars().count(), 600);
    }

    #[tokio::test]
    async fn test_submit_unauthorized_sets_credentials_error() {
        let h = harness();
        *h.essays.submit_result.lock().unwrap() = Some(Err(ApiProblem::Unauthorized));
        h.store.set_essay_text(&"a".repeat(600));

        assert!(!h.store.submit_essay().await);
        assert_eq!(h.store.error(), MSG_INVALID_CREDENTIALS);
        assert!(h.store.submitted_ids().is_empty());
    }

    #[tokio::test]
    async fn test_submit_failure_sets_generic_error_and_clears_loading() {
        let h = harness();
        *h.essays.submit_result.lock().unwrap() = Some(Err(ApiProblem::Server { status: 502 }));
        h.store.set_essay_text(&"a".repeat(600));

        assert!(!h.store.submit_essay().await);
        assert_eq!(h.store.error(), MSG_SUBMIT_FAILED);
        assert!(!h.store.is_loading());
    }

    #[tokio::test]
    async fn test_transcribe_returns_extracted_text() {
        let h = harness();
        *h.essays.transcribe_result.lock().unwrap() = Some(Ok(ImageTranscriptionResponse {
            status: Some(200),
            message: Some("ok".to_string()),
            extracted_text: "texto extraído".to_string(),
            error: None,
        }));

        let text = h.store.transcribe_image("aGVsbG8=").await;
        assert_eq!(text.as_deref(), Some("texto extraído"));
        assert!(h.store.error().is_empty());
        assert!(!h.store.is_loading());
    }

    #[tokio::test]
    async fn test_transcribe_failure_sets_error() {
        let h = harness();
        *h.essays.transcribe_result.lock().unwrap() = Some(Err(ApiProblem::Timeout));

        assert_eq!(h.store.transcribe_image("aGVsbG8=").await, None);
        assert_eq!(h.store.error(), MSG_TRANSCRIBE_FAILED);
        assert!(!h.store.is_loading());
    }

    #[tokio::test]
    async fn test_submission_events() {
        let h = harness();
        *h.essays.submit_result.lock().unwrap() = Some(Ok(accepted("abc123")));
        h.store.set_essay_text(&"a".repeat(600));

        let mut events = h.store.subscribe();
        assert!(h.store.submit_essay().await);

        assert_eq!(
            events.recv().await,
            Some(EssayEvent::LoadingChanged { loading: true })
        );
        assert_eq!(
            events.recv().await,
            Some(EssayEvent::Submitted {
                essay_id: "abc123".to_string(),
            })
        );
        assert_eq!(
            events.recv().await,
            Some(EssayEvent::LoadingChanged { loading: false })
        );
    }
}
