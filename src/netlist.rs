//! Netlist line formatting.
//!
//! Every device writes one line that the netlist grammar parses back into
//! an equivalent device:
//!
//! ```text
//! R1 n1 n2 value
//! C1 n1 n2 value                 (initial condition not written)
//! L1 n1 n2 value                 (initial condition not written)
//! K1 L1 L2 k
//! V1 n1 n2 [type=vdc value=V] [vac=mag] [waveform]
//! I1 n1 n2 [type=idc value=I] [iac=mag arg=phase] [waveform]
//! E1 n1 n2 sn1 sn2 alpha         (G1 likewise)
//! F1 n1 n2 source_id alpha
//! ```
//!
//! Waveform clauses use `v`-prefixed level labels on voltage sources and
//! `i`-prefixed ones on current sources. The sine phase is not written.
//! Numbers use the shortest representation that parses back to the same
//! `f64`.

use std::fmt;

use crate::circuit::{NodeId, NodeNames};
use crate::devices::{
    Capacitor, Ccvs, Cccs, IndependentSource, Inductor, InductorCoupling, Resistor, SourceKind,
    Vccs, Vcvs,
};
use crate::error::{DeviceError, Result};
use crate::waveforms::Waveform;

/// Formatting of a device as a single netlist line.
pub trait ToNetlist {
    /// Write the line, resolving terminals to display names through `names`.
    fn netlist_line(&self, names: &dyn NodeNames) -> Result<String>;
}

/// Format a number so that parsing the text yields exactly `value`.
pub fn format_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value}")
    } else {
        format!("{value:?}")
    }
}

fn node_name<'a>(device: &str, names: &'a dyn NodeNames, node: NodeId) -> Result<&'a str> {
    names.node_name(node).ok_or_else(|| DeviceError::UnnamedNode {
        device: device.to_string(),
        node: node.to_string(),
    })
}

fn two_terminal_line(
    name: &str,
    nodes: [NodeId; 2],
    names: &dyn NodeNames,
    value: f64,
) -> Result<String> {
    Ok(format!(
        "{} {} {} {}",
        name,
        node_name(name, names, nodes[0])?,
        node_name(name, names, nodes[1])?,
        format_value(value)
    ))
}

impl ToNetlist for Resistor {
    fn netlist_line(&self, names: &dyn NodeNames) -> Result<String> {
        two_terminal_line(&self.name, self.nodes, names, self.value())
    }
}

impl ToNetlist for Capacitor {
    fn netlist_line(&self, names: &dyn NodeNames) -> Result<String> {
        two_terminal_line(&self.name, self.nodes, names, self.value)
    }
}

impl ToNetlist for Inductor {
    fn netlist_line(&self, names: &dyn NodeNames) -> Result<String> {
        two_terminal_line(&self.name, self.nodes, names, self.value)
    }
}

impl ToNetlist for InductorCoupling {
    // Inductors are referenced by identifier, not by node
    fn netlist_line(&self, _names: &dyn NodeNames) -> Result<String> {
        Ok(format!(
            "{} {} {} {}",
            self.name,
            self.l1,
            self.l2,
            format_value(self.k)
        ))
    }
}

impl ToNetlist for IndependentSource {
    fn netlist_line(&self, names: &dyn NodeNames) -> Result<String> {
        let mut tokens = vec![
            self.name.clone(),
            node_name(&self.name, names, self.nodes[0])?.to_string(),
            node_name(&self.name, names, self.nodes[1])?.to_string(),
        ];

        if let Some(dc) = self.dc_value() {
            tokens.push(format!("type={}", self.kind.dc_keyword()));
            tokens.push(format!("value={}", format_value(dc)));
        }

        if let Some(ac) = self.ac() {
            match self.kind {
                // The voltage-source grammar has no phase keyword
                SourceKind::Voltage => tokens.push(format!("vac={}", format_value(ac.magnitude))),
                SourceKind::Current => {
                    tokens.push(format!("iac={}", format_value(ac.magnitude)));
                    tokens.push(format!("arg={}", format_value(ac.phase)));
                }
            }
        }

        if let (true, Some(waveform)) = (self.is_time_dependent(), self.waveform()) {
            tokens.push(waveform.netlist_clause(self.kind.level_prefix()));
        }

        Ok(tokens.join(" "))
    }
}

fn voltage_controlled_line(
    name: &str,
    nodes: [NodeId; 2],
    sense: [NodeId; 2],
    names: &dyn NodeNames,
    alpha: f64,
) -> Result<String> {
    Ok(format!(
        "{} {} {} {} {} {}",
        name,
        node_name(name, names, nodes[0])?,
        node_name(name, names, nodes[1])?,
        node_name(name, names, sense[0])?,
        node_name(name, names, sense[1])?,
        format_value(alpha)
    ))
}

impl ToNetlist for Vcvs {
    fn netlist_line(&self, names: &dyn NodeNames) -> Result<String> {
        voltage_controlled_line(&self.name, self.nodes, self.sense, names, self.alpha)
    }
}

impl ToNetlist for Vccs {
    fn netlist_line(&self, names: &dyn NodeNames) -> Result<String> {
        voltage_controlled_line(&self.name, self.nodes, self.sense, names, self.alpha)
    }
}

impl ToNetlist for Cccs {
    fn netlist_line(&self, names: &dyn NodeNames) -> Result<String> {
        Ok(format!(
            "{} {} {} {} {}",
            self.name,
            node_name(&self.name, names, self.nodes[0])?,
            node_name(&self.name, names, self.nodes[1])?,
            self.source_id,
            format_value(self.alpha)
        ))
    }
}

impl ToNetlist for Ccvs {
    fn netlist_line(&self, _names: &dyn NodeNames) -> Result<String> {
        Err(self.unsupported("netlist_line"))
    }
}

impl Waveform {
    /// The `type=...` clause of a source line, with level labels prefixed by
    /// `prefix` (`'v'` or `'i'`).
    pub fn netlist_clause(&self, prefix: char) -> String {
        let p = prefix;
        match self {
            Waveform::Pulse(w) => format!(
                "type=pulse {p}1={} {p}2={} td={} per={} tr={} tf={} pw={}",
                format_value(w.v1()),
                format_value(w.v2()),
                format_value(w.td()),
                format_value(w.per()),
                format_value(w.tr()),
                format_value(w.tf()),
                format_value(w.pw()),
            ),
            Waveform::Sine(w) => format!(
                "type=sin {p}o={} {p}a={} freq={} theta={} td={}",
                format_value(w.vo()),
                format_value(w.va()),
                format_value(w.freq()),
                format_value(w.theta()),
                format_value(w.td()),
            ),
            Waveform::Exponential(w) => format!(
                "type=exp {p}1={} {p}2={} td1={} td2={} tau1={} tau2={}",
                format_value(w.v1()),
                format_value(w.v2()),
                format_value(w.td1()),
                format_value(w.td2()),
                format_value(w.tau1()),
                format_value(w.tau2()),
            ),
        }
    }
}

impl fmt::Display for Waveform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.netlist_clause('v'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::Device;
    use crate::waveforms::{Exponential, Pulse, Sine, WaveformKind};
    use num_complex::Complex64;
    use std::collections::HashMap;

    fn names() -> Vec<String> {
        ["0", "in", "out", "ctl"].iter().map(|s| s.to_string()).collect()
    }

    fn n(i: usize) -> NodeId {
        NodeId(i)
    }

    /// Stand-in for the netlist grammar: positional fields and `key=value` pairs.
    struct Fields<'a> {
        positional: Vec<&'a str>,
        keyed: Vec<(&'a str, &'a str)>,
    }

    impl<'a> Fields<'a> {
        fn parse(line: &'a str) -> Self {
            let mut positional = Vec::new();
            let mut keyed = Vec::new();
            for token in line.split_whitespace() {
                match token.split_once('=') {
                    Some((k, v)) => keyed.push((k, v)),
                    None => positional.push(token),
                }
            }
            Self { positional, keyed }
        }

        fn node(&self, i: usize) -> NodeId {
            let name = self.positional[i];
            NodeId(names().iter().position(|s| s == name).unwrap())
        }

        fn num(&self, i: usize) -> f64 {
            self.positional[i].parse().unwrap()
        }

        fn key(&self, key: &str) -> Option<f64> {
            self.keyed
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.parse().unwrap())
        }

        fn waveform(&self, prefix: char) -> Option<Waveform> {
            let kind = self
                .keyed
                .iter()
                .filter(|(k, _)| *k == "type")
                .find_map(|(_, v)| WaveformKind::from_keyword(v))?;
            let args: HashMap<String, f64> = self
                .keyed
                .iter()
                .filter(|(k, _)| *k != "type")
                .map(|(k, v)| (k.replacen(prefix, "v", 1), v.parse().unwrap()))
                .collect();
            Some(Waveform::from_named(kind, &args).unwrap())
        }
    }

    #[test]
    fn test_format_value_is_lossless() {
        for v in [0.0, 1000.0, -3.0, 0.1, 1e-12, 4.7e3, 2.2e-6, 1.0 / 3.0, 1e300, f64::INFINITY] {
            let text = format_value(v);
            assert_eq!(text.parse::<f64>().unwrap(), v, "{text}");
        }
        assert_eq!(format_value(1000.0), "1000");
        assert_eq!(format_value(0.5), "0.5");
        assert_eq!(format_value(f64::INFINITY), "inf");
    }

    #[test]
    fn test_resistor_round_trip() {
        let r = Resistor::new("R1", [n(1), n(2)], 4.7e3).unwrap();
        let line = r.netlist_line(&names()).unwrap();
        assert_eq!(line, "R1 in out 4700");

        let f = Fields::parse(&line);
        let back = Resistor::new(f.positional[0], [f.node(1), f.node(2)], f.num(3)).unwrap();
        assert_eq!(back, r);
    }

    #[test]
    fn test_capacitor_and_inductor_drop_initial_condition() {
        let c = Capacitor::new("C1", [n(2), n(0)], 1e-9).with_initial_condition(2.0);
        let line = c.netlist_line(&names()).unwrap();
        assert_eq!(line, "C1 out 0 1e-9");

        let f = Fields::parse(&line);
        let back = Capacitor::new(f.positional[0], [f.node(1), f.node(2)], f.num(3));
        assert_eq!(back.value, c.value);
        assert_eq!(back.initial_condition, 0.0);

        let l = Inductor::new("L1", [n(1), n(3)], 1e-3).with_initial_condition(0.5);
        assert_eq!(l.netlist_line(&names()).unwrap(), "L1 in ctl 0.001");
    }

    #[test]
    fn test_coupling_line() {
        let k = InductorCoupling::new("K1", "La", "Lb", 0.95, 1e-4);
        assert_eq!(k.netlist_line(&names()).unwrap(), "K1 La Lb 0.95");
    }

    #[test]
    fn test_dc_source_round_trip() {
        let v = IndependentSource::voltage("V1", [n(1), n(0)], Some(5.0), None);
        let line = v.netlist_line(&names()).unwrap();
        assert_eq!(line, "V1 in 0 type=vdc value=5");

        let f = Fields::parse(&line);
        let back = IndependentSource::voltage(
            f.positional[0],
            [f.node(1), f.node(2)],
            f.key("value"),
            None,
        );
        assert_eq!(back, v);

        let i = IndependentSource::current("I1", [n(0), n(2)], Some(-1e-3), None);
        assert_eq!(i.netlist_line(&names()).unwrap(), "I1 0 out type=idc value=-0.001");
    }

    #[test]
    fn test_ac_clauses() {
        let v = IndependentSource::voltage("V1", [n(1), n(0)], None, Some(Complex64::new(0.0, 2.0)));
        assert_eq!(v.netlist_line(&names()).unwrap(), "V1 in 0 vac=2");

        let i = IndependentSource::current("I1", [n(1), n(0)], None, Some(Complex64::new(-1.0, 0.0)));
        let line = i.netlist_line(&names()).unwrap();
        let f = Fields::parse(&line);
        assert_eq!(f.key("iac"), Some(1.0));
        assert_eq!(f.key("arg"), Some(std::f64::consts::PI));
    }

    #[test]
    fn test_zero_ac_is_not_absent_ac() {
        let zero = Some(Complex64::new(0.0, 0.0));

        let v = IndependentSource::voltage("V1", [n(1), n(0)], None, zero);
        let line = v.netlist_line(&names()).unwrap();
        assert_eq!(line, "V1 in 0 vac=0");
        assert_eq!(Fields::parse(&line).key("vac"), Some(0.0));

        let v = IndependentSource::voltage("V2", [n(1), n(0)], None, None);
        let line = v.netlist_line(&names()).unwrap();
        assert_eq!(line, "V2 in 0");
        assert_eq!(Fields::parse(&line).key("vac"), None);

        let i = IndependentSource::current("I1", [n(1), n(0)], None, zero);
        let line = i.netlist_line(&names()).unwrap();
        assert_eq!(line, "I1 in 0 iac=0 arg=0");
        let f = Fields::parse(&line);
        assert_eq!(f.key("iac"), Some(0.0));
        assert_eq!(f.key("arg"), Some(0.0));

        let i = IndependentSource::current("I2", [n(1), n(0)], Some(1.0), None);
        let line = i.netlist_line(&names()).unwrap();
        assert!(!line.contains("iac=") && !line.contains("arg="), "{line}");
        assert_eq!(Fields::parse(&line).key("iac"), None);
    }

    #[test]
    fn test_waveform_clauses() {
        let pulse = Pulse::new(0.0, 5.0, 1e-3, 1e-6, 2e-6, 5e-4, 1e-3).unwrap();
        let v = IndependentSource::voltage("V1", [n(1), n(0)], Some(0.0), None).with_waveform(pulse);
        assert_eq!(
            v.netlist_line(&names()).unwrap(),
            "V1 in 0 type=vdc value=0 type=pulse v1=0 v2=5 td=0.001 per=0.001 tr=1e-6 tf=2e-6 pw=0.0005"
        );

        let exp = Exponential::new(0.0, 1.0, 0.0, 1.0, f64::INFINITY, f64::INFINITY).unwrap();
        let i = IndependentSource::current("I1", [n(1), n(0)], None, None).with_waveform(exp);
        assert_eq!(
            i.netlist_line(&names()).unwrap(),
            "I1 in 0 type=exp i1=0 i2=1 td1=0 td2=inf tau1=1 tau2=inf"
        );
    }

    #[test]
    fn test_waveform_clause_round_trip() {
        let pulse = Pulse::new(-1.0, 1.0, 0.5, 0.1, 0.2, 0.3, 2.0).unwrap();
        let i = IndependentSource::current("I1", [n(1), n(0)], None, None).with_waveform(pulse);
        let line = i.netlist_line(&names()).unwrap();
        let f = Fields::parse(&line);
        assert_eq!(f.waveform('i'), Some(Waveform::Pulse(pulse)));
    }

    #[test]
    fn test_sine_phase_is_not_written() {
        let sine = Sine::full(1.0, 2.0, 50.0, 0.0, 0.0, 90.0);
        let v = IndependentSource::voltage("V1", [n(1), n(0)], None, None).with_waveform(sine);
        let line = v.netlist_line(&names()).unwrap();
        assert_eq!(line, "V1 in 0 type=sin vo=1 va=2 freq=50 theta=0 td=0");

        match Fields::parse(&line).waveform('v') {
            Some(Waveform::Sine(back)) => {
                assert_eq!(back.freq(), 50.0);
                assert_eq!(back.phi(), 0.0);
            }
            other => panic!("expected sine, got {other:?}"),
        }
    }

    #[test]
    fn test_controlled_round_trip() {
        let e = Vcvs::new("E1", [n(2), n(0)], [n(1), n(3)], 12.5);
        let line = e.netlist_line(&names()).unwrap();
        assert_eq!(line, "E1 out 0 in ctl 12.5");
        let f = Fields::parse(&line);
        let back = Vcvs::new(
            f.positional[0],
            [f.node(1), f.node(2)],
            [f.node(3), f.node(4)],
            f.num(5),
        );
        assert_eq!(back, e);

        let g = Vccs::new("G1", [n(2), n(0)], [n(1), n(0)], 1e-3);
        assert_eq!(g.netlist_line(&names()).unwrap(), "G1 out 0 in 0 0.001");

        let fsrc = Cccs::new("F1", [n(2), n(0)], "V1", 3.0);
        let line = fsrc.netlist_line(&names()).unwrap();
        assert_eq!(line, "F1 out 0 V1 3");
        let f = Fields::parse(&line);
        let back = Cccs::new(f.positional[0], [f.node(1), f.node(2)], f.positional[3], f.num(4));
        assert_eq!(back, fsrc);
    }

    #[test]
    fn test_unnamed_node() {
        let r = Resistor::new("R1", [n(1), n(9)], 10.0).unwrap();
        let err = r.netlist_line(&names()).unwrap_err();
        assert_eq!(
            err,
            DeviceError::UnnamedNode {
                device: "R1".to_string(),
                node: "N9".to_string(),
            }
        );
    }

    #[test]
    fn test_device_dispatch_matches_variant() {
        let r = Resistor::new("R1", [n(1), n(0)], 1.0).unwrap();
        let expected = r.netlist_line(&names()).unwrap();
        let device = Device::from(r);
        assert_eq!(device.netlist_line(&names()).unwrap(), expected);
    }
}
