use sppgrid_core::GridError;

#[test]
fn config_errors_name_the_missing_parameter() {
    let err = GridError::config("SPPGRID_INFLUX_URL");
    assert_eq!(err.to_string(), "missing configuration: SPPGRID_INFLUX_URL");
}

#[test]
fn source_unavailable_carries_series_and_message() {
    let err = GridError::unavailable("rtm_lmp_api", "status 503");
    assert_eq!(
        err.to_string(),
        "source unavailable: rtm_lmp_api: status 503"
    );
}

#[test]
fn malformed_and_invalid_render_their_detail() {
    assert_eq!(
        GridError::malformed("dam_forecast: expected array").to_string(),
        "malformed upstream payload: dam_forecast: expected array"
    );
    assert_eq!(
        GridError::invalid("settlement point set must not be empty").to_string(),
        "invalid argument: settlement point set must not be empty"
    );
}
