// Generated by veneer; do not edit.

pub mod cache_proxy2;
pub mod calc_proxy;
pub mod derived_proxy;
pub mod svc_proxy;
pub mod widget_proxy;

pub use cache_proxy2::CacheProxy2;
pub use calc_proxy::CalcProxy;
pub use derived_proxy::DerivedProxy;
pub use svc_proxy::SvcProxy;
pub use widget_proxy::WidgetProxy;

/// Register every non-generic generated proxy type in the
/// process-wide registry.
pub fn register_all() {
    calc_proxy::register_calc_proxy();
    derived_proxy::register_derived_proxy();
    svc_proxy::register_svc_proxy();
    widget_proxy::register_widget_proxy();
}
