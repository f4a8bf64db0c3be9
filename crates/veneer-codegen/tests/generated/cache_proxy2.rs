// Generated by veneer; do not edit.
// Source interface: crate::ifaces::Cache

/// Generated proxy for `crate::ifaces::Cache`.
pub struct CacheProxy2<K: Copy + 'static, V: 'static> {
    interceptor: veneer_runtime::InterceptorHandler,
    _marker: ::std::marker::PhantomData<fn() -> (K, V)>,
}

static CACHE_PROXY2_TOKENS: &[&[veneer_runtime::MethodToken]] = &[
    &[
        veneer_runtime::MethodToken::new(
            veneer_runtime::InterfaceToken::new("crate::ifaces", "Cache", 2),
            "put",
            0,
        ),
        veneer_runtime::MethodToken::new(
            veneer_runtime::InterfaceToken::new("crate::ifaces", "Cache", 2),
            "get",
            1,
        ),
    ],
];

impl<K: Copy + 'static, V: 'static> CacheProxy2<K, V> {
    /// Construct a proxy bound to `interceptor`.
    pub fn new(interceptor: veneer_runtime::InterceptorHandler) -> Self {
        CacheProxy2 {
            interceptor,
            _marker: ::std::marker::PhantomData,
        }
    }
}

impl<K: Copy + 'static, V: 'static> veneer_runtime::ProxyBinding for CacheProxy2<K, V> {
    const INTERFACE: veneer_runtime::InterfaceToken =
        veneer_runtime::InterfaceToken::new("crate::ifaces", "Cache", 2);

    fn bind(interceptor: veneer_runtime::InterceptorHandler) -> Self {
        Self::new(interceptor)
    }
}

impl<K: Copy + 'static, V: 'static> crate::ifaces::Cache<K, V> for CacheProxy2<K, V> {
    fn put(&self, key: K, value: V) {
        let token = &CACHE_PROXY2_TOKENS[0][0];
        let args = vec![
            veneer_runtime::CallValue::new(key),
            veneer_runtime::CallValue::new(value),
        ];
        let _ = self.interceptor.invoke(self, token, args, Vec::new());
    }

    fn get(&self, key: K) -> Option<V> {
        let token = &CACHE_PROXY2_TOKENS[0][1];
        let args = vec![
            veneer_runtime::CallValue::new(key),
        ];
        self.interceptor
            .invoke(self, token, args, Vec::new())
            .take::<Option<V>>()
    }
}

impl<K: Copy + 'static, V: 'static> CacheProxy2<K, V> {
    pub fn put(&self, key: K, value: V) {
        <Self as crate::ifaces::Cache<K, V>>::put(self, key, value)
    }

    pub fn get(&self, key: K) -> Option<V> {
        <Self as crate::ifaces::Cache<K, V>>::get(self, key)
    }
}
