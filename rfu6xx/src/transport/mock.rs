// rfu6xx/src/transport/mock.rs

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;
use std::time::Duration;

use crate::protocol::Variant;
use crate::transport::traits::{Connector, Transport};
use crate::types::{BrowseEntry, NodeRef};
use crate::{Error, Result};

/// A method call captured by [`MockTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub object: NodeRef,
    pub method: NodeRef,
    pub params: Vec<Variant>,
}

/// Mock transport for unit tests. It serves a scripted address space,
/// records every request and returns queued call outputs.
#[derive(Debug, Default, Clone)]
pub struct MockTransport {
    pub namespaces: HashMap<String, u16>,
    pub children: HashMap<NodeRef, Vec<BrowseEntry>>,
    /// Per-node attribute values. The front value is returned; it is
    /// consumed only while more values are queued behind it.
    pub attributes: HashMap<NodeRef, VecDeque<Variant>>,
    pub call_responses: VecDeque<Vec<Variant>>,
    /// Testing hook: number of upcoming calls that fail with a transport error
    pub call_failures: usize,
    pub browsed: Vec<NodeRef>,
    pub reads: Vec<NodeRef>,
    pub calls: Vec<RecordedCall>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_namespace(&mut self, uri: &str, index: u16) {
        self.namespaces.insert(uri.to_string(), index);
    }

    pub fn add_child(&mut self, parent: NodeRef, entry: BrowseEntry) {
        self.children.entry(parent).or_default().push(entry);
    }

    /// Replace whatever is queued for `node` with a single value.
    pub fn set_attribute(&mut self, node: NodeRef, value: Variant) {
        self.attributes.insert(node, VecDeque::from([value]));
    }

    /// Queue a value after the ones already present for `node`.
    pub fn queue_attribute(&mut self, node: NodeRef, value: Variant) {
        self.attributes.entry(node).or_default().push_back(value);
    }

    pub fn push_call_response(&mut self, outputs: Vec<Variant>) {
        self.call_responses.push_back(outputs);
    }

    /// Set how many subsequent calls should fail (for tests).
    pub fn set_call_failures(&mut self, n: usize) {
        self.call_failures = n;
    }

    /// Total number of requests that reached the mock.
    pub fn request_count(&self) -> usize {
        self.browsed.len() + self.reads.len() + self.calls.len()
    }
}

impl Transport for MockTransport {
    fn namespace_index(&mut self, uri: &str) -> Result<Option<u16>> {
        Ok(self.namespaces.get(uri).copied())
    }

    fn browse_children(&mut self, node: NodeRef) -> Result<Vec<BrowseEntry>> {
        self.browsed.push(node);
        Ok(self.children.get(&node).cloned().unwrap_or_default())
    }

    fn read_attribute(&mut self, node: NodeRef) -> Result<Variant> {
        self.reads.push(node);
        let queue = self
            .attributes
            .get_mut(&node)
            .ok_or_else(|| Error::Transport(format!("BadNodeIdUnknown: {}", node)))?;
        let value = if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        };
        value.ok_or_else(|| Error::Transport(format!("no value for {}", node)))
    }

    fn call(
        &mut self,
        object: NodeRef,
        method: NodeRef,
        params: &[Variant],
    ) -> Result<Vec<Variant>> {
        self.calls.push(RecordedCall {
            object,
            method,
            params: params.to_vec(),
        });
        if self.call_failures > 0 {
            self.call_failures -= 1;
            return Err(Error::Transport(format!("BadMethodInvalid: {}", method)));
        }
        // No scripted output -> Timeout, like a server that never answers
        self.call_responses.pop_front().ok_or(Error::Timeout)
    }
}

/// Lets a test keep a handle on the mock after a `Device` takes ownership.
impl Transport for Rc<RefCell<MockTransport>> {
    fn namespace_index(&mut self, uri: &str) -> Result<Option<u16>> {
        self.borrow_mut().namespace_index(uri)
    }

    fn browse_children(&mut self, node: NodeRef) -> Result<Vec<BrowseEntry>> {
        self.borrow_mut().browse_children(node)
    }

    fn read_attribute(&mut self, node: NodeRef) -> Result<Variant> {
        self.borrow_mut().read_attribute(node)
    }

    fn call(
        &mut self,
        object: NodeRef,
        method: NodeRef,
        params: &[Variant],
    ) -> Result<Vec<Variant>> {
        self.borrow_mut().call(object, method, params)
    }
}

/// Connector handing out clones of a prepared [`MockTransport`].
#[derive(Debug, Default)]
pub struct MockConnector {
    template: MockTransport,
    refuse: Option<String>,
    pub connected: RefCell<Vec<(String, Duration)>>,
}

impl MockConnector {
    pub fn new(template: MockTransport) -> Self {
        Self {
            template,
            refuse: None,
            connected: RefCell::new(Vec::new()),
        }
    }

    /// A connector whose every connect attempt fails with `reason`.
    pub fn refusing(reason: &str) -> Self {
        Self {
            refuse: Some(reason.to_string()),
            ..Self::default()
        }
    }
}

impl Connector for MockConnector {
    fn connect(&self, url: &str, timeout: Duration) -> Result<Box<dyn Transport>> {
        self.connected.borrow_mut().push((url.to_string(), timeout));
        match &self.refuse {
            Some(reason) => Err(Error::Connect(format!("{}: {}", url, reason))),
            None => Ok(Box::new(self.template.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_queue_keeps_last_value() {
        let node = NodeRef::new(4, 1);
        let mut m = MockTransport::new();
        m.queue_attribute(node, Variant::Int32(0));
        m.queue_attribute(node, Variant::Int32(2));

        assert_eq!(m.read_attribute(node).unwrap(), Variant::Int32(0));
        assert_eq!(m.read_attribute(node).unwrap(), Variant::Int32(2));
        assert_eq!(m.read_attribute(node).unwrap(), Variant::Int32(2));
        assert_eq!(m.reads.len(), 3);
    }

    #[test]
    fn unknown_attribute_is_transport_error() {
        let mut m = MockTransport::new();
        assert!(matches!(
            m.read_attribute(NodeRef::new(1, 1)),
            Err(Error::Transport(_))
        ));
    }

    #[test]
    fn calls_are_recorded_and_answered_in_order() {
        let mut m = MockTransport::new();
        m.push_call_response(vec![Variant::Int32(1)]);
        m.push_call_response(vec![]);

        let obj = NodeRef::new(4, 10);
        let method = NodeRef::new(4, 11);
        assert_eq!(
            m.call(obj, method, &[Variant::Boolean(true)]).unwrap(),
            vec![Variant::Int32(1)]
        );
        assert_eq!(m.call(obj, method, &[]).unwrap(), vec![]);
        // No more responses -> Timeout
        assert!(matches!(m.call(obj, method, &[]), Err(Error::Timeout)));
        assert_eq!(m.calls.len(), 3);
        assert_eq!(m.calls[0].params, vec![Variant::Boolean(true)]);
    }

    #[test]
    fn call_failure_hook() {
        let mut m = MockTransport::new();
        m.push_call_response(vec![]);
        m.set_call_failures(1);
        let n = NodeRef::new(0, 1);
        assert!(matches!(m.call(n, n, &[]), Err(Error::Transport(_))));
        assert!(m.call(n, n, &[]).is_ok());
    }

    #[test]
    fn connector_records_and_refuses() {
        let c = MockConnector::new(MockTransport::new());
        assert!(c.connect("opc.tcp://a:4840", Duration::from_millis(5)).is_ok());
        assert_eq!(c.connected.borrow()[0].0, "opc.tcp://a:4840");

        let r = MockConnector::refusing("BadTimeout");
        assert!(matches!(
            r.connect("opc.tcp://b:4840", Duration::from_millis(5)),
            Err(Error::Connect(_))
        ));
    }
}
