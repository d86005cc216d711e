use crate::model::submission::CreateSubmissionDto;

/// The submission most recently sent from the personal page, shown on the
/// completion page.
#[derive(Clone, Default, PartialEq)]
pub struct LastSubmission {
    pub submission: Option<CreateSubmissionDto>,
}
