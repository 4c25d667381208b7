use crate::GatewayError;

use googletest::prelude::*;

#[test]
fn given_429_when_mapped_then_rate_limited() {
    let error = GatewayError::from_status(429);

    assert_that!(error.status(), eq(429u16));
    assert_that!(
        error.user_message(),
        eq("Rate limit exceeded. Please try again in a moment.")
    );
}

#[test]
fn given_402_when_mapped_then_credits_exhausted() {
    let error = GatewayError::from_status(402);

    assert_that!(error.status(), eq(402u16));
    assert_that!(
        error.user_message(),
        eq("AI credits exhausted. Please add credits to continue.")
    );
}

#[test]
fn given_other_status_when_mapped_then_upstream_500() {
    let error = GatewayError::from_status(503);

    assert_that!(error.status(), eq(500u16));
    assert_that!(error.user_message(), eq("AI gateway error: 503"));
}

#[test]
fn given_missing_key_then_message_names_variable() {
    let error = GatewayError::missing_api_key("LOVABLE_API_KEY");

    assert_that!(error.status(), eq(500u16));
    assert_that!(
        error.user_message(),
        eq("LOVABLE_API_KEY is not configured")
    );
}
