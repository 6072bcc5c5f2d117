// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Reflection on RPC methods: each method is a type carrying its name and
//! its (lotus JSON) parameter and return types.

use std::{future::Future, marker::PhantomData};

use jsonrpsee::core::{ClientError, traits::ToRpcParams};

use super::Client;
use crate::lotus_json::HasLotusJson;

/// A definition of an RPC method handled by a Lotus-compatible node.
pub trait RpcMethod<const ARITY: usize> {
    /// Method name.
    const NAME: &'static str;
    /// Types of each argument, as a tuple.
    type Params: HasLotusJson + Send;
    /// Return value of this method.
    type Ok: HasLotusJson + Send;
}

/// Utility methods, defined as an extension trait to avoid having to specify
/// `ARITY` in user code.
pub trait RpcMethodExt<const ARITY: usize>: RpcMethod<ARITY> {
    /// Returns an at-rest description of a call to this method.
    fn request(params: Self::Params) -> Result<Request<Self::Ok>, serde_json::Error> {
        Ok(Request {
            method_name: Self::NAME,
            params: params.into_lotus_json_value()?,
            result_type: PhantomData,
        })
    }

    /// Calls this method on a node.
    fn call(
        client: &Client,
        params: Self::Params,
    ) -> impl Future<Output = Result<Self::Ok, ClientError>> + Send {
        let request = Self::request(params);
        async move {
            let request = request.map_err(|e| {
                ClientError::Custom(format!("couldn't serialize {} params: {e}", Self::NAME))
            })?;
            client.call(request).await
        }
    }
}
impl<const ARITY: usize, T> RpcMethodExt<ARITY> for T where T: RpcMethod<ARITY> {}

/// A `Request` is an at-rest description of a remote procedure call. It can
/// be invoked using [`Client::call`].
#[derive(Debug, Clone)]
pub struct Request<T = serde_json::Value> {
    pub method_name: &'static str,
    pub params: serde_json::Value,
    pub result_type: PhantomData<T>,
}

impl<T> ToRpcParams for Request<T> {
    fn to_rpc_params(self) -> Result<Option<Box<serde_json::value::RawValue>>, serde_json::Error> {
        Ok(Some(serde_json::value::to_raw_value(&self.params)?))
    }
}
