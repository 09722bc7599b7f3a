use crate::{Criteria, Item, RequestId};

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Query the remote catalog. Single-item criteria open the detail view.
    FetchCatalog {
        request_id: RequestId,
        criteria: Criteria,
    },
    /// Hand the chosen item to the selection holder.
    SelectItem(Item),
}
