use cosmwasm_std::{StdError, Uint128};
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Payment error")]
    PaymentError(#[from] PaymentError),

    #[error("Sale is not active.")]
    SaleNotActive {},

    #[error("Not on the whitelist.")]
    NotWhitelisted {},

    #[error("Exceeded maximum number of tokens.")]
    MaxTokensExceeded {},

    #[error("Transaction value did not equal the mint price.")]
    IncorrectPaymentAmount { expected: Uint128, sent: Uint128 },

    #[error("No funds to withdraw")]
    NothingToWithdraw {},
}

impl From<ContractError> for StdError {
    fn from(err: ContractError) -> StdError {
        StdError::generic_err(err.to_string())
    }
}
