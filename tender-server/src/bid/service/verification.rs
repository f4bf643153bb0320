use {
    super::Service,
    crate::{
        api::RestError,
        bid::entities,
    },
};

/// Bid form whose required fields were all provided.
pub struct VerifiedBidForm {
    pub form:   entities::BidForm,
    pub salary: f64,
}

impl Service {
    pub(super) fn resolve_tender(
        context: &entities::TenderContext,
    ) -> Result<entities::Tender, RestError> {
        context.resolve().ok_or(RestError::NoTenderSelected)
    }

    pub(super) fn verify_bid_amount(bid_in_inr: f64) -> Result<(), RestError> {
        if !bid_in_inr.is_finite() || bid_in_inr <= 0. {
            return Err(RestError::InvalidInput(
                "Bid amount must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub(super) fn verify_bid_form(form: entities::BidForm) -> Result<VerifiedBidForm, RestError> {
        let mut missing = vec![];
        if Self::verify_bid_amount(form.bid_in_inr).is_err() {
            missing.push("bid amount");
        }
        if form.mobile_number.trim().is_empty() {
            missing.push("mobile number");
        }
        if form.address.trim().is_empty() {
            missing.push("address");
        }
        let salary = form
            .salary
            .filter(|salary| salary.is_finite() && *salary >= 0.);
        if salary.is_none() {
            missing.push("salary");
        }
        if form.occupation.trim().is_empty() {
            missing.push("occupation");
        }

        match salary {
            Some(salary) if missing.is_empty() => Ok(VerifiedBidForm { form, salary }),
            _ => Err(RestError::InvalidInput(format!(
                "Please fill in all required fields ({})",
                missing.join(", ")
            ))),
        }
    }
}
