use crate::problem::functions::ExactSolution;

#[cfg(feature = "json_export")]
use json::{object, JsonValue};

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};

/// A collection of scalar field quantities sampled on a uniform grid over a rectangle
///
/// Quantities can be operated on and printed to VTK files for visualization, e.g. to plot
/// the reference solution or source term of a benchmark problem.
pub struct UniformFieldSample {
    quantities: HashMap<String, Vec<Vec<f64>>>,
    x_points: Vec<f64>,
    y_points: Vec<f64>,
}

impl UniformFieldSample {
    /// Generate an empty field sample over `[x_min, x_max] × [y_min, y_max]`
    ///
    /// * `densities`: the number of evaluation points in the x and y directions respectively
    pub fn new(x_range: [f64; 2], y_range: [f64; 2], densities: [usize; 2]) -> Self {
        Self {
            quantities: HashMap::new(),
            x_points: uniform_range(x_range[0], x_range[1], densities[0]),
            y_points: uniform_range(y_range[0], y_range[1], densities[1]),
        }
    }

    /// Evaluate a pointwise function on the grid and store it under `name`
    pub fn insert_fn<F>(&mut self, name: impl AsRef<str>, f: F)
    where
        F: Fn(f64, f64) -> f64,
    {
        // stored row-major with x varying fastest (VTK point order)
        let values = self
            .y_points
            .iter()
            .map(|y| self.x_points.iter().map(|x| f(*x, *y)).collect())
            .collect();

        self.quantities.insert(String::from(name.as_ref()), values);
    }

    /// Evaluate an [ExactSolution] on the grid and store it under `name`
    pub fn insert_exact<E: ExactSolution>(&mut self, name: impl AsRef<str>, exact: &E) {
        self.insert_fn(name, |x, y| exact.value(x, y));
    }

    pub fn quantity_names(&self) -> Vec<String> {
        self.quantities.keys().cloned().collect()
    }

    /// map an operation over a field quantity (`name`) and store the result in a new quantity (`result_name`)
    pub fn map_to_quantity<F>(
        &mut self,
        name: impl AsRef<str>,
        result_name: impl AsRef<str>,
        operator: F,
    ) -> Result<(), String>
    where
        F: Fn(&f64) -> f64 + Copy,
    {
        let q_key = String::from(name.as_ref());

        match self.quantities.get(&q_key) {
            None => Err(format!(
                "FieldSample does not have quantity: {}; cannot apply operation!",
                q_key
            )),
            Some(values) => {
                let new_values = values
                    .iter()
                    .map(|row| row.iter().map(operator).collect())
                    .collect();
                self.quantities
                    .insert(String::from(result_name.as_ref()), new_values);
                Ok(())
            }
        }
    }

    /// evaluate an expression of two field quantities and store the result in a new quantity (`result_name`)
    pub fn expression_2arg<F>(
        &mut self,
        operand_names: [impl AsRef<str>; 2],
        result_name: impl AsRef<str>,
        expression: F,
    ) -> Result<(), String>
    where
        F: Fn(f64, f64) -> f64,
    {
        let op_a = String::from(operand_names[0].as_ref());
        let op_b = String::from(operand_names[1].as_ref());

        match (self.quantities.get(&op_a), self.quantities.get(&op_b)) {
            (Some(values_a), Some(values_b)) => {
                let new_values = values_a
                    .iter()
                    .zip(values_b.iter())
                    .map(|(row_a, row_b)| {
                        row_a
                            .iter()
                            .zip(row_b.iter())
                            .map(|(a, b)| expression(*a, *b))
                            .collect()
                    })
                    .collect();
                self.quantities
                    .insert(String::from(result_name.as_ref()), new_values);
                Ok(())
            }
            _ => Err(format!(
                "FieldSample does not have quantities {} and {}; cannot apply operation!",
                op_a, op_b
            )),
        }
    }

    /// create a VTK file at the designated `path` including all field quantities
    ///
    /// These files can be plotted using [Visit](https://wci.llnl.gov/simulation/computer-codes/visit)
    pub fn print_all_to_vtk(&self, path: impl AsRef<str>) -> std::io::Result<()> {
        let mut all_q_names = self.quantity_names();
        all_q_names.sort();
        self.print_quantities_to_vtk(path, all_q_names)
    }

    /// create a VTK file at the designated `path` including a list of field quantities
    pub fn print_quantities_to_vtk(
        &self,
        path: impl AsRef<str>,
        quantity_names: Vec<String>,
    ) -> std::io::Result<()> {
        let output_file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(&output_file);

        let nx = self.x_points.len();
        let ny = self.y_points.len();

        // header
        writeln!(writer, "# vtk DataFile Version 3.0")?;
        writeln!(writer, "# File generated by conv_diff_2d")?;
        writeln!(writer, "ASCII")?;
        writeln!(writer, "DATASET STRUCTURED_GRID")?;
        writeln!(writer, "DIMENSIONS {} {} 1", nx, ny)?;

        // points
        writeln!(writer, "POINTS {} double", nx * ny)?;
        for y in self.y_points.iter() {
            for x in self.x_points.iter() {
                writeln!(writer, "{:.10} {:.10} 0.0", x, y)?;
            }
        }

        // field values
        writeln!(writer, "POINT_DATA {}", nx * ny)?;
        for q_name in quantity_names {
            match self.quantities.get(&q_name) {
                Some(values) => {
                    writeln!(writer, "SCALARS {} double 1 \nLOOKUP_TABLE default", q_name)?;
                    for row in values.iter() {
                        for value in row.iter() {
                            write!(writer, "{:.15} ", value)?;
                        }
                    }
                    writeln!(writer)?;
                }
                None => println!(
                    "Field Sample does not have Quantity '{}'; cannot write to VTK!",
                    q_name
                ),
            };
        }

        Ok(())
    }

    /// Print all field quantities (and the grid coordinates) to a JSON file specified by path.
    #[cfg(feature = "json_export")]
    pub fn export_to_json(&self, path: impl AsRef<str>) -> std::io::Result<()> {
        let f = File::create(path.as_ref())?;
        let mut w = BufWriter::new(&f);

        let mut quantities = JsonValue::new_object();
        for (name, values) in self.quantities.iter() {
            quantities[name.as_str()] =
                JsonValue::from(values.iter().cloned().collect::<Vec<_>>());
        }

        let sample_object = object! {
            "x": JsonValue::from(self.x_points.clone()),
            "y": JsonValue::from(self.y_points.clone()),
            "quantities": quantities,
        };

        sample_object.write_pretty(&mut w, 4)?;

        Ok(())
    }
}

fn uniform_range(min: f64, max: f64, n: usize) -> Vec<f64> {
    let step = (max - min) / ((n - 1) as f64);
    (0..n).map(|i| (i as f64) * step + min).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmarks::boundary_layer::BoundaryLayerSolution;

    #[test]
    fn uniform_range_endpoints() {
        let range = uniform_range(-1.0, 1.0, 5);
        assert_eq!(range.len(), 5);
        assert!((range[0] + 1.0).abs() < 1e-14);
        assert!((range[2]).abs() < 1e-14);
        assert!((range[4] - 1.0).abs() < 1e-14);
    }

    #[test]
    fn quantity_operations() {
        let mut sample = UniformFieldSample::new([-1.0, 1.0], [-1.0, 1.0], [9, 9]);
        sample.insert_fn("x_coord", |x, _| x);
        sample.insert_fn("y_coord", |_, y| y);

        sample
            .map_to_quantity("x_coord", "x_squared", |x| x * x)
            .unwrap();
        sample
            .expression_2arg(["x_coord", "y_coord"], "sum", |a, b| a + b)
            .unwrap();

        assert!(sample.map_to_quantity("missing", "out", |x| *x).is_err());
        assert!(sample
            .expression_2arg(["x_coord", "missing"], "out", |a, _| a)
            .is_err());

        let mut names = sample.quantity_names();
        names.sort();
        assert_eq!(names, vec!["sum", "x_coord", "x_squared", "y_coord"]);

        // corner point of "sum" grid: x = -1, y = -1
        assert!((sample.quantities["sum"][0][0] + 2.0).abs() < 1e-14);
        // center of "x_squared": x = 0
        assert!((sample.quantities["x_squared"][4][4]).abs() < 1e-14);
    }

    #[test]
    fn exact_solution_sampling() {
        let exact = BoundaryLayerSolution::new(0.25);
        let mut sample = UniformFieldSample::new([-1.0, 1.0], [-1.0, 1.0], [11, 11]);
        sample.insert_exact("u_exact", &exact);

        use crate::problem::functions::ExactSolution;

        // the far grid column sits on the layer edge x = 1 where u vanishes
        let values = &sample.quantities["u_exact"];
        for row in values.iter() {
            assert!(row[10].abs() < 1e-14);
        }

        // an interior grid point matches direct evaluation: (x, y) = (-0.6, 0.2)
        assert!((values[6][2] - exact.value(-0.6, 0.2)).abs() < 1e-14);
    }
}
